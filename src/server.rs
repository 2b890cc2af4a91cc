//! HTTP routes.
//!
//! | Method | Path | Body |
//! |---|---|---|
//! | `POST` | `/game/start/{room}` | none |
//! | `GET` | `/game/state/{room}` | none |
//! | `POST` | `/game/action/{room}` | `{"player": 0, "action": "hit"}` |
//!
//! Every success returns the [`GameSnapshot`] as JSON. Errors are plain text,
//! including 405 for a known path with the wrong method.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::game::GameSnapshot;
use crate::registry::Registry;

/// Shared handler state.
pub type AppState = Arc<Registry>;

/// Body of `POST /game/action/{room}`.
///
/// Missing fields, or a `null` body, take their zero values: seat 0 and an
/// empty action name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionRequest {
    /// Seat index.
    pub player: i64,
    /// `"hit"` or `"stand"`.
    pub action: String,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::GameNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingRoomId | Self::NotPlaying | Self::MalformedBody | Self::Action(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected");
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Room segment of a game route. Segments after the room id are ignored.
#[derive(Debug, Deserialize)]
struct RoomPath {
    room_id: String,
}

/// Builds the application router over `registry`.
pub fn router(registry: AppState) -> Router {
    let start_route = post(start).fallback(method_not_allowed);
    let state_route = get(state).fallback(method_not_allowed);
    let action_route = post(action).fallback(method_not_allowed);

    Router::new()
        .route("/", get(health))
        .route("/game/start/:room_id", start_route.clone())
        .route("/game/start/:room_id/*rest", start_route)
        .route("/game/state/:room_id", state_route.clone())
        .route("/game/state/:room_id/*rest", state_route)
        .route("/game/action/:room_id", action_route.clone())
        .route("/game/action/:room_id/*rest", action_route)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

async fn health() -> &'static str {
    "Blackjack server running"
}

async fn start(
    State(registry): State<AppState>,
    Path(RoomPath { room_id }): Path<RoomPath>,
) -> Json<GameSnapshot> {
    Json(registry.start(&room_id))
}

async fn state(
    State(registry): State<AppState>,
    Path(RoomPath { room_id }): Path<RoomPath>,
) -> Result<Json<GameSnapshot>, ApiError> {
    registry.state(&room_id).map(Json)
}

async fn action(
    State(registry): State<AppState>,
    Path(RoomPath { room_id }): Path<RoomPath>,
    body: Bytes,
) -> Result<Json<GameSnapshot>, ApiError> {
    // The body is parsed under the lock so a missing game is reported first.
    let snapshot = registry.update(&room_id, |game| {
        let request = serde_json::from_slice::<Option<ActionRequest>>(&body)
            .map_err(|_| ApiError::MalformedBody)?
            .unwrap_or_default();
        game.act(request.player, &request.action)?;

        tracing::debug!(
            room = %room_id,
            player = request.player,
            action = %request.action,
            "action applied"
        );
        Ok(())
    })?;

    Ok(Json(snapshot))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Game routes without a room segment are a client error; anything else is
/// unknown.
async fn fallback(uri: Uri) -> Response {
    match uri.path().trim_end_matches('/') {
        "/game/start" | "/game/state" | "/game/action" => ApiError::MissingRoomId.into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
