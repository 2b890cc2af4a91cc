//! Game state types.

use core::str::FromStr;

use serde::Serialize;

use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::Outcome;

/// Number of player seats at every table.
pub const PLAYER_COUNT: usize = 3;

/// Turn value once every player is finished.
pub const DEALER_TURN: usize = PLAYER_COUNT;

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Players may still act.
    Playing,
    /// Dealer has played and results are final.
    Finished,
}

/// Player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Take no more cards.
    Stand,
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            _ => Err(ActionError::UnknownAction),
        }
    }
}

/// Read-only view of a game, without the shoe.
///
/// This is the JSON body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Dealer's hand.
    pub dealer: Hand,
    /// Player hands, by seat.
    pub players: [Hand; PLAYER_COUNT],
    /// Result per seat.
    pub results: [Outcome; PLAYER_COUNT],
    /// Seat to act, or [`DEALER_TURN`].
    pub turn: usize,
    /// Current status.
    pub status: GameStatus,
}
