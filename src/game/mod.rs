//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, shuffled_deck};
use crate::hand::Hand;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, DEALER_TURN, GameSnapshot, GameStatus, PLAYER_COUNT};

/// A three-seat blackjack table against a dealer.
///
/// A game is dealt as soon as it is created: two cards to each seat and two
/// to the dealer, interleaved seat 0, 1, 2, dealer. Players then [`hit`] or
/// [`stand`] in any order; once every seat is done the dealer plays and the
/// results are final.
///
/// [`hit`]: Game::hit
/// [`stand`]: Game::stand
#[derive(Debug, Clone)]
pub struct Game {
    /// Undealt cards; the next card is at the end.
    shoe: Vec<Card>,
    dealer: Hand,
    players: [Hand; PLAYER_COUNT],
    results: [Outcome; PLAYER_COUNT],
    turn: usize,
    status: GameStatus,
    /// Feeds every shuffle for this game, including exhaustion reshuffles.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates and deals a new game with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjroom::{Game, GameStatus};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// assert!(game.players().iter().all(|hand| hand.len() == 2));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = shuffled_deck(&mut rng);
        Self::deal(shoe, rng)
    }

    /// Creates and deals a game that draws `cards` in the given order.
    ///
    /// The first eight cards form the initial deal. If the game runs past the
    /// end of `cards`, a fresh deck shuffled from `seed` takes over.
    #[must_use]
    pub fn with_shoe(cards: Vec<Card>, seed: u64) -> Self {
        let mut shoe = cards;
        shoe.reverse();
        Self::deal(shoe, ChaCha8Rng::seed_from_u64(seed))
    }

    fn deal(shoe: Vec<Card>, rng: ChaCha8Rng) -> Self {
        let mut game = Self {
            shoe,
            dealer: Hand::new(),
            players: [Hand::new(), Hand::new(), Hand::new()],
            results: [Outcome::Playing; PLAYER_COUNT],
            turn: 0,
            status: GameStatus::Playing,
            rng,
        };

        for _ in 0..2 {
            for seat in 0..PLAYER_COUNT {
                let card = game.draw();
                game.players[seat].add_card(card);
            }
            let card = game.draw();
            game.dealer.add_card(card);
        }

        game
    }

    /// Draws a card, replacing an empty shoe with a brand-new shuffled deck.
    ///
    /// The replacement deck may repeat cards already in play.
    fn draw(&mut self) -> Card {
        if let Some(card) = self.shoe.pop() {
            return card;
        }

        tracing::debug!("shoe exhausted, shuffling a new deck");
        self.shoe = shuffled_deck(&mut self.rng);
        self.shoe.pop().expect("a new deck always holds 52 cards")
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player hands, by seat.
    #[must_use]
    pub const fn players(&self) -> &[Hand; PLAYER_COUNT] {
        &self.players
    }

    /// Returns the result for each seat.
    #[must_use]
    pub const fn results(&self) -> &[Outcome; PLAYER_COUNT] {
        &self.results
    }

    /// Returns the seat to act, or [`DEALER_TURN`] once the round is over.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the undealt cards. The next card drawn is the last one.
    #[must_use]
    pub fn shoe(&self) -> &[Card] {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns a copy of everything a client may see.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            dealer: self.dealer.clone(),
            players: self.players.clone(),
            results: self.results,
            turn: self.turn,
            status: self.status,
        }
    }
}
