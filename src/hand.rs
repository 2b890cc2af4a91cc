//! Hand representation and evaluation.

use serde::Serialize;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Evaluates a run of cards, returning `(total, soft)`.
///
/// Aces start at 11 and are demoted to 1 one at a time while the total is
/// over 21. `soft` is `true` when at least one ace was demoted. This is the
/// reverse of the usual casino meaning of a soft hand, and callers rely on it.
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    let mut soft = false;
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
        soft = true;
    }

    (value, soft)
}

/// A hand held by a player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// No further action is permitted (stood or busted).
    done: bool,
    /// Value went over 21 on a hit.
    busted: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            done: false,
            busted: false,
        }
    }

    /// Adds a card to the hand.
    ///
    /// This does not update `done` or `busted`; the game decides when a hand
    /// is finished.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand may take no further action.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns whether the hand was marked busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Marks the hand as finished.
    pub const fn finish(&mut self) {
        self.done = true;
    }

    /// Marks the hand as busted and finished.
    pub const fn bust(&mut self) {
        self.busted = true;
        self.done = true;
    }

    /// Returns `(total, soft)` for the hand. See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> (u8, bool) {
        evaluate(&self.cards)
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether any ace had to be demoted from 11 to 1.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the value is over 21, regardless of the `busted` flag.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
