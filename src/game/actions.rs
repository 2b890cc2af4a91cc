use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Action, Game, GameStatus};

impl Game {
    fn ensure_can_act(&self, player: usize) -> Result<(), ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        let hand = self.players.get(player).ok_or(ActionError::InvalidPlayer)?;
        if hand.is_done() {
            return Err(ActionError::PlayerDone);
        }

        Ok(())
    }

    /// Applies a wire-level action to a seat.
    ///
    /// Checks run in order: game state, seat index, seat already finished,
    /// then the action name. Nothing is mutated unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is finished, `player` is outside 0..=2,
    /// the seat is done, or `action` is not `hit` or `stand`.
    pub fn act(&mut self, player: i64, action: &str) -> Result<(), ActionError> {
        if self.status != GameStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        let seat = usize::try_from(player).map_err(|_| ActionError::InvalidPlayer)?;
        self.ensure_can_act(seat)?;

        match action.parse::<Action>()? {
            Action::Hit => self.hit(seat).map(|_| ()),
            Action::Stand => self.stand(seat),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Any unfinished seat may hit; turn order is not enforced. Going over 21
    /// marks the seat busted and done.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is finished, the seat does not exist, or
    /// the seat is already done.
    pub fn hit(&mut self, player: usize) -> Result<Card, ActionError> {
        self.ensure_can_act(player)?;

        let card = self.draw();
        let hand = &mut self.players[player];
        hand.add_card(card);

        if hand.is_bust() {
            hand.bust();
        }

        tracing::debug!(player, card = card.label(), value = hand.value(), "hit");
        self.advance_turn();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is finished, the seat does not exist, or
    /// the seat is already done.
    pub fn stand(&mut self, player: usize) -> Result<(), ActionError> {
        self.ensure_can_act(player)?;

        self.players[player].finish();

        tracing::debug!(player, "stand");
        self.advance_turn();

        Ok(())
    }

    /// Points `turn` at the lowest unfinished seat, or plays the dealer out
    /// when every seat is done.
    fn advance_turn(&mut self) {
        match self.players.iter().position(|hand| !hand.is_done()) {
            Some(seat) => self.turn = seat,
            None => self.finish_round(),
        }
    }

    /// Returns whether every seat has stood or busted.
    #[must_use]
    pub fn all_players_done(&self) -> bool {
        self.players.iter().all(Hand::is_done)
    }
}
