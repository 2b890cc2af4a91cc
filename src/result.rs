//! Per-player round results.

use serde::Serialize;

/// Result label for one player seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    /// Round still in progress.
    #[default]
    Playing,
    /// Player beat the dealer, or the dealer busted.
    Win,
    /// Dealer finished with the higher value.
    Lose,
    /// Player went over 21.
    Bust,
    /// Tie.
    Push,
}

impl Outcome {
    /// Scores a finished player hand against the dealer's final value.
    ///
    /// Only the `busted` flag set at hit time counts as a bust; a stood hand
    /// is never re-checked.
    #[must_use]
    pub const fn settle(busted: bool, player_value: u8, dealer_value: u8) -> Self {
        if busted {
            Self::Bust
        } else if dealer_value > 21 || player_value > dealer_value {
            Self::Win
        } else if player_value < dealer_value {
            Self::Lose
        } else {
            Self::Push
        }
    }
}
