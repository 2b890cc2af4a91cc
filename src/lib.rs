//! A multi-room blackjack service: three players against a dealer, with every
//! game held in memory and keyed by room id.
//!
//! The crate provides a [`Game`] type that runs one round (deal, hit or stand,
//! dealer play, results), a [`Registry`] that stores one game per room behind
//! a single lock, and an axum [`router`](server::router) exposing it over
//! JSON.
//!
//! # Example
//!
//! ```
//! use bjroom::{GameStatus, Registry};
//!
//! let registry = Registry::new();
//! let state = registry.start("lobby");
//! assert_eq!(state.status, GameStatus::Playing);
//!
//! let state = registry.act("lobby", 0, "stand").unwrap();
//! assert_eq!(state.turn, 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod registry;
pub mod result;
pub mod server;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, shuffled_deck};
pub use error::{ActionError, ApiError, OptionsError};
pub use game::{Action, DEALER_TURN, Game, GameSnapshot, GameStatus, PLAYER_COUNT};
pub use hand::Hand;
pub use options::ServerOptions;
pub use registry::Registry;
pub use result::Outcome;
