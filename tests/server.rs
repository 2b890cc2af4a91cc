//! HTTP route tests, driven in-process through the router.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bjroom::{Card, Game, Registry, Suit, server};
use serde_json::{Value, json};
use tower::ServiceExt;

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    body: String,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

fn app() -> (Router, Arc<Registry>) {
    let registry = Arc::new(Registry::new());
    (server::router(Arc::clone(&registry)), registry)
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> Reply {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Reply {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn act(app: &Router, room: &str, player: i64, action: &str) -> Reply {
    let body = json!({ "player": player, "action": action }).to_string();
    send(app, "POST", &format!("/game/action/{room}"), &body).await
}

#[tokio::test]
async fn start_returns_fresh_game() {
    let (app, _) = app();

    let reply = send(&app, "POST", "/game/start/r1", "").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));

    let state = reply.json();
    assert!(state.get("deck").is_none());
    assert_eq!(state["status"], "playing");
    assert_eq!(state["turn"], 0);
    assert_eq!(state["results"], json!(["Playing", "Playing", "Playing"]));
    assert_eq!(state["dealer"]["cards"].as_array().unwrap().len(), 2);
    for player in state["players"].as_array().unwrap() {
        assert_eq!(player["cards"].as_array().unwrap().len(), 2);
        assert_eq!(player["done"], false);
        assert_eq!(player["busted"], false);
    }

    let state_reply = send(&app, "GET", "/game/state/r1", "").await;
    assert_eq!(state_reply.status, StatusCode::OK);
    assert_eq!(state_reply.body, reply.body);
}

#[tokio::test]
async fn state_is_idempotent() {
    let (app, _) = app();
    send(&app, "POST", "/game/start/r1", "").await;
    act(&app, "r1", 0, "hit").await;

    let first = send(&app, "GET", "/game/state/r1", "").await;
    let second = send(&app, "GET", "/game/state/r1", "").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn unknown_room() {
    let (app, registry) = app();

    let reply = send(&app, "GET", "/game/state/ghost", "").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, "Game not found");

    let reply = act(&app, "ghost", 0, "hit").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, "Game not found or not in playing state");

    // The missing game is reported before the body is looked at.
    let reply = send(&app, "POST", "/game/action/ghost", "not json").await;
    assert_eq!(reply.body, "Game not found or not in playing state");

    assert!(registry.is_empty());
}

#[tokio::test]
async fn rejected_actions() {
    let (app, _) = app();
    send(&app, "POST", "/game/start/r1", "").await;

    let reply = act(&app, "r1", 5, "hit").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, "Invalid player");

    let reply = act(&app, "r1", -1, "stand").await;
    assert_eq!(reply.body, "Invalid player");

    let reply = act(&app, "r1", 0, "split").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, "Unknown action");

    for body in ["", "{", "42", r#"{"player": "zero", "action": "hit"}"#] {
        let reply = send(&app, "POST", "/game/action/r1", body).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(reply.body, "Invalid input");
    }
}

#[tokio::test]
async fn missing_fields_default_to_zero_values() {
    let (app, _) = app();
    send(&app, "POST", "/game/start/r1", "").await;

    let reply = send(&app, "POST", "/game/action/r1", r#"{"player": 1}"#).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, "Unknown action");

    for body in ["null", "{}"] {
        let reply = send(&app, "POST", "/game/action/r1", body).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(reply.body, "Unknown action");
    }

    let reply = send(&app, "POST", "/game/action/r1", r#"{"action": "stand"}"#).await;
    assert_eq!(reply.status, StatusCode::OK);
    let state = reply.json();
    assert_eq!(state["players"][0]["done"], true);
    assert_eq!(state["players"][1]["done"], false);
    assert_eq!(state["turn"], 1);
}

#[tokio::test]
async fn standing_twice_is_rejected_without_change() {
    let (app, _) = app();
    send(&app, "POST", "/game/start/r1", "").await;

    let first = act(&app, "r1", 0, "stand").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["turn"], 1);

    let second = act(&app, "r1", 0, "stand").await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body, "Player already finished");

    let state = send(&app, "GET", "/game/state/r1", "").await;
    assert_eq!(state.body, first.body);
}

#[tokio::test]
async fn hit_until_bust_advances_turn() {
    let (app, _) = app();
    let initial = send(&app, "POST", "/game/start/r2", "").await.json();

    let mut state = initial.clone();
    while state["players"][0]["done"] == false {
        let reply = act(&app, "r2", 0, "hit").await;
        assert_eq!(reply.status, StatusCode::OK);
        state = reply.json();
    }

    assert_eq!(state["players"][0]["busted"], true);
    assert_eq!(state["turn"], 1);
    assert_eq!(state["status"], "playing");
    assert_eq!(state["players"][1], initial["players"][1]);
    assert_eq!(state["players"][2], initial["players"][2]);
}

#[tokio::test]
async fn dealer_plays_once_all_seats_are_done() {
    let (app, registry) = app();
    send(&app, "POST", "/game/start/r3", "").await;

    for player in 0..3 {
        assert_eq!(act(&app, "r3", player, "stand").await.status, StatusCode::OK);
    }

    let state = send(&app, "GET", "/game/state/r3", "").await.json();
    assert_eq!(state["status"], "finished");
    assert_eq!(state["turn"], 3);
    for result in state["results"].as_array().unwrap() {
        assert!(["Win", "Lose", "Bust", "Push"].contains(&result.as_str().unwrap()));
    }
    assert!(registry.state("r3").unwrap().dealer.value() >= 17);

    let reply = act(&app, "r3", 0, "hit").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, "Game not found or not in playing state");
}

#[tokio::test]
async fn stacked_round_scores_each_seat() {
    let (app, registry) = app();
    let draws = [
        Card::new(Suit::Hearts, 10),
        Card::new(Suit::Clubs, 10),
        Card::new(Suit::Diamonds, 10),
        Card::new(Suit::Spades, 10),
        Card::new(Suit::Hearts, 9),
        Card::new(Suit::Clubs, 7),
        Card::new(Suit::Diamonds, 6),
        Card::new(Suit::Spades, 6),
        Card::new(Suit::Diamonds, 13),
        Card::new(Suit::Spades, 2),
    ];
    registry.insert("r4", Game::with_shoe(draws.to_vec(), 1));

    act(&app, "r4", 0, "stand").await;
    act(&app, "r4", 1, "stand").await;
    let state = act(&app, "r4", 2, "hit").await.json();

    assert_eq!(state["results"], json!(["Win", "Lose", "Bust"]));
    assert_eq!(
        state["dealer"],
        json!({
            "cards": [
                {"suit": "S", "value": "10"},
                {"suit": "S", "value": "6"},
                {"suit": "S", "value": "2"},
            ],
            "done": false,
            "busted": false,
        })
    );
    assert_eq!(state["players"][2]["cards"][2], json!({"suit": "D", "value": "K"}));
}

#[tokio::test]
async fn restart_replaces_room() {
    let (app, _) = app();
    send(&app, "POST", "/game/start/r1", "").await;
    for player in 0..3 {
        act(&app, "r1", player, "stand").await;
    }

    let reply = send(&app, "POST", "/game/start/r1", "").await.json();
    assert_eq!(reply["status"], "playing");
    assert_eq!(reply["turn"], 0);
}

#[tokio::test]
async fn missing_room_id() {
    let (app, _) = app();

    for (method, uri) in [
        ("POST", "/game/start"),
        ("POST", "/game/start/"),
        ("GET", "/game/state/"),
        ("POST", "/game/action"),
    ] {
        let reply = send(&app, method, uri, "").await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(reply.body, "Missing gameroomid");
    }
}

#[tokio::test]
async fn segments_after_room_id_are_ignored() {
    let (app, _) = app();

    let reply = send(&app, "POST", "/game/start/r1/x", "").await;
    assert_eq!(reply.status, StatusCode::OK);

    let state = send(&app, "GET", "/game/state/r1/x/y", "").await;
    assert_eq!(state.status, StatusCode::OK);
    assert_eq!(state.body, reply.body);

    let body = json!({ "player": 0, "action": "stand" }).to_string();
    let reply = send(&app, "POST", "/game/action/r1/extra", &body).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(send(&app, "GET", "/game/state/r1", "").await.json()["turn"], 1);
}

#[tokio::test]
async fn wrong_method_is_plain_text_405() {
    let (app, registry) = app();

    for (method, uri) in [
        ("GET", "/game/start/r9"),
        ("POST", "/game/state/r1"),
        ("GET", "/game/action/r1"),
        ("DELETE", "/game/start/r1/x"),
    ] {
        let reply = send(&app, method, uri, "").await;
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(reply.body, "Method not allowed");
        assert!(reply.content_type.unwrap().starts_with("text/plain"));
    }
    assert!(registry.is_empty());
}

#[tokio::test]
async fn health_and_unknown_paths() {
    let (app, _) = app();

    let reply = send(&app, "GET", "/", "").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "Blackjack server running");

    let reply = send(&app, "GET", "/nope", "").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, "Not Found");
}
