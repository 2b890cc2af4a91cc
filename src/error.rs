//! Error types for game, HTTP and configuration operations.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Game is not in the playing state.
    #[error("Game not in playing state")]
    InvalidState,
    /// Player index outside 0..=2.
    #[error("Invalid player")]
    InvalidPlayer,
    /// Player has already stood or busted.
    #[error("Player already finished")]
    PlayerDone,
    /// Action is neither `hit` nor `stand`.
    #[error("Unknown action")]
    UnknownAction,
}

/// Errors returned by the HTTP handlers.
///
/// Each variant maps to exactly one status code; see
/// [`ApiError::status_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Room id segment missing from the path.
    #[error("Missing gameroomid")]
    MissingRoomId,
    /// No game for the room (state route).
    #[error("Game not found")]
    GameNotFound,
    /// No game for the room, or the game already finished (action route).
    #[error("Game not found or not in playing state")]
    NotPlaying,
    /// Known route, wrong HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Request body is not a valid action request.
    #[error("Invalid input")]
    MalformedBody,
    /// The game rejected the action.
    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Errors that can occur while reading server options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Host is not an IP address.
    #[error("invalid host `{0}`")]
    InvalidHost(String),
    /// Port is not a number in 0..=65535.
    #[error("invalid port `{0}`")]
    InvalidPort(String),
}
