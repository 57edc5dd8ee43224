use api::{create_app, state::AppState};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use shared::repositories::in_memory_game_repository::InMemoryGameRepository;
use shared::services::game_service::GameService;
use std::sync::Arc;
use tower::ServiceExt;

/// The full router backed by a fresh in-memory store.
pub fn test_app() -> Router {
    let repository = Arc::new(InMemoryGameRepository::new());
    let game_service = Arc::new(GameService::new(repository));
    create_app(AppState { game_service })
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn create_game(app: &Router) -> Value {
    let (status, game) = send(
        app,
        Method::POST,
        "/games",
        Some(json!({"players": [{"name": "Mario"}, {"name": "Luigi"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create_game failed: {}", game);
    game
}

pub async fn play(app: &Router, game_id: &str, player_number: u8, tile_number: i64) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/games/{}/moves", game_id),
        Some(json!({"player_number": player_number, "tile_number": tile_number})),
    )
    .await
}

pub fn game_id(game: &Value) -> String {
    game["id"]
        .as_str()
        .expect("Game should have an id")
        .to_string()
}
