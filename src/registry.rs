//! Process-wide room registry.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ApiError;
use crate::game::{Game, GameSnapshot, GameStatus};
use crate::sync::Mutex;

/// Maps room ids to their games.
///
/// Every operation holds one lock across all rooms, so operations are
/// serialized process-wide. Games are never evicted.
#[derive(Default)]
pub struct Registry {
    games: Mutex<HashMap<String, Game>>,
}

/// Seed taken from the wall clock, in nanoseconds since the UNIX epoch.
///
/// Calls in quick succession may return the same seed.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game in `room_id`, replacing any existing one.
    pub fn start(&self, room_id: &str) -> GameSnapshot {
        self.insert(room_id, Game::new(clock_seed()))
    }

    /// Installs `game` in `room_id`, replacing any existing one.
    pub fn insert(&self, room_id: &str, game: Game) -> GameSnapshot {
        let snapshot = game.snapshot();
        let replaced = self.games.lock().insert(room_id.to_owned(), game);

        tracing::info!(room = room_id, replaced = replaced.is_some(), "game started");
        snapshot
    }

    /// Returns the current state of `room_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::GameNotFound`] if the room has no game.
    pub fn state(&self, room_id: &str) -> Result<GameSnapshot, ApiError> {
        self.games
            .lock()
            .get(room_id)
            .map(Game::snapshot)
            .ok_or(ApiError::GameNotFound)
    }

    /// Runs `apply` against the playing game in `room_id` under the lock.
    ///
    /// `apply` must reject before mutating; its error is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotPlaying`] if the room has no game or the game is
    /// finished, otherwise whatever `apply` returns.
    pub fn update<F>(&self, room_id: &str, apply: F) -> Result<GameSnapshot, ApiError>
    where
        F: FnOnce(&mut Game) -> Result<(), ApiError>,
    {
        let mut games = self.games.lock();
        let game = games
            .get_mut(room_id)
            .filter(|game| game.status() == GameStatus::Playing)
            .ok_or(ApiError::NotPlaying)?;

        apply(game)?;
        Ok(game.snapshot())
    }

    /// Applies `action` for seat `player` in `room_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotPlaying`] if the room has no playing game, or the
    /// game's [`ActionError`](crate::ActionError).
    pub fn act(&self, room_id: &str, player: i64, action: &str) -> Result<GameSnapshot, ApiError> {
        self.update(room_id, |game| {
            game.act(player, action).map_err(ApiError::from)
        })
    }

    /// Returns the number of rooms with a game.
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether no room has a game.
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

