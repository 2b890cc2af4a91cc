use crate::result::Outcome;

use super::{DEALER_TURN, Game, GameStatus};

/// Dealer draws while below this value.
const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Dealer plays their hand, then the round is scored.
    ///
    /// The dealer draws until reaching 17 or higher. Soft 17 is not special,
    /// and the dealer's own `done`/`busted` flags are never set.
    pub(super) fn finish_round(&mut self) {
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw();
            self.dealer.add_card(card);
        }

        self.status = GameStatus::Finished;
        self.turn = DEALER_TURN;
        self.settle();

        tracing::info!(
            dealer = self.dealer.value(),
            results = ?self.results,
            "round finished"
        );
    }

    /// Compares each seat to the dealer's final hand.
    fn settle(&mut self) {
        let dealer_value = self.dealer.value();

        for (result, hand) in self.results.iter_mut().zip(&self.players) {
            *result = Outcome::settle(hand.is_busted(), hand.value(), dealer_value);
        }
    }
}
