//! Card types and deck utilities.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Suit {
    /// Spades.
    #[serde(rename = "S")]
    Spades,
    /// Hearts.
    #[serde(rename = "H")]
    Hearts,
    /// Diamonds.
    #[serde(rename = "D")]
    Diamonds,
    /// Clubs.
    #[serde(rename = "C")]
    Clubs,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];
}

/// A playing card.
///
/// Serializes as `{"suit": "S", "value": "A"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank label used on the wire (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut card = serializer.serialize_struct("Card", 2)?;
        card.serialize_field("suit", &self.suit)?;
        card.serialize_field("value", self.label())?;
        card.end()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds a full 52-card deck and shuffles it with `rng`.
///
/// Cards are generated suit by suit (S, H, D, C), Ace through King, before
/// the shuffle.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.shuffle(rng);
    cards
}
