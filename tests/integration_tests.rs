//! Integration tests for the tic-tac-toe API
//!
//! These drive the real axum router over an in-memory game store:
//! - game creation and lookup
//! - move validation and the HTTP error mapping
//! - complete games ending in a win or a draw

mod common;

use axum::http::{Method, StatusCode};
use common::api_helpers::{create_game, game_id, play, send, test_app};
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_game() {
    let app = test_app();

    let game = create_game(&app).await;

    assert!(!game_id(&game).is_empty());
    assert_eq!(game["status"], "in_progress");
    assert_eq!(game["next_player_number"], 1);
    assert!(game["winning_player_number"].is_null());
    assert_eq!(game["moves"], json!([]));

    let players = game["players"].as_array().unwrap();
    let numbers: HashSet<u64> = players.iter().map(|p| p["number"].as_u64().unwrap()).collect();
    assert_eq!(numbers, HashSet::from([1, 2]));
    for player in players {
        let expected_sign = if player["number"] == 1 { "X" } else { "O" };
        assert_eq!(player["sign"], expected_sign);
    }
}

#[tokio::test]
async fn test_create_game_needs_two_players() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/games",
        Some(json!({"players": [{"name": "Mario"}]})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["title"], "Bad Request");
}

#[tokio::test]
async fn test_list_and_get_games() {
    let app = test_app();
    let first = create_game(&app).await;
    let second = create_game(&app).await;

    let (status, body) = send(&app, Method::GET, "/games", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: HashSet<String> = body["games"]
        .as_array()
        .unwrap()
        .iter()
        .map(game_id)
        .collect();
    assert_eq!(ids, HashSet::from([game_id(&first), game_id(&second)]));

    let (status, fetched) = send(&app, Method::GET, &format!("/games/{}", game_id(&first)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, first);
}

#[tokio::test]
async fn test_get_unknown_game() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/games/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "detail": "Game ID \"does-not-exist\" not found!",
            "status": 404,
            "title": "Not Found"
        })
    );
}

#[tokio::test]
async fn test_move_on_unknown_game() {
    let app = test_app();

    let (status, body) = play(&app, "does-not-exist", 1, 5).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Not Found");
}

#[tokio::test]
async fn test_valid_move_is_recorded() {
    let app = test_app();
    let id = game_id(&create_game(&app).await);

    let (status, game) = play(&app, &id, 1, 5).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(game["next_player_number"], 2);
    assert_eq!(game["moves"][0]["player_number"], 1);
    assert_eq!(game["moves"][0]["tile_number"], 5);
    assert_eq!(game["last_update_time"], game["moves"][0]["create_time"]);

    let (_, stored) = send(&app, Method::GET, &format!("/games/{}", id), None).await;
    assert_eq!(stored, game);
}

#[tokio::test]
async fn test_wrong_turn_is_rejected() {
    let app = test_app();
    let id = game_id(&create_game(&app).await);

    let (status, body) = play(&app, &id, 2, 5).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Expecting player number (1) to make a move but found player number (2) instead!"
    );

    let (_, stored) = send(&app, Method::GET, &format!("/games/{}", id), None).await;
    assert_eq!(stored["moves"], json!([]));
}

#[tokio::test]
async fn test_played_tile_is_rejected() {
    let app = test_app();
    let id = game_id(&create_game(&app).await);
    play(&app, &id, 1, 5).await;

    let (status, body) = play(&app, &id, 2, 5).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Tile number (5) was already played!");
}

#[tokio::test]
async fn test_out_of_range_tile_is_rejected() {
    let app = test_app();
    let id = game_id(&create_game(&app).await);

    let (status, _) = play(&app, &id, 1, 10).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = play(&app, &id, 1, -1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Bad Request");
}

#[tokio::test]
async fn test_horizontal_win_ends_game() {
    let app = test_app();
    let id = game_id(&create_game(&app).await);

    for (player_number, tile_number) in [(1, 6), (2, 3), (1, 4), (2, 2)] {
        let (status, _) = play(&app, &id, player_number, tile_number).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, game) = play(&app, &id, 1, 5).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(game["status"], "done");
    assert_eq!(game["winning_player_number"], 1);
    assert!(game["next_player_number"].is_null());

    let (status, body) = play(&app, &id, 2, 7).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        format!(
            "Game ID ({}) is not in progress anymore, current status is (done)!",
            id
        )
    );
}

#[tokio::test]
async fn test_full_board_is_draw() {
    let app = test_app();
    let id = game_id(&create_game(&app).await);

    let moves = [
        (1, 1),
        (2, 2),
        (1, 3),
        (2, 5),
        (1, 4),
        (2, 6),
        (1, 8),
        (2, 7),
        (1, 9),
    ];
    let mut last = json!(null);
    for (player_number, tile_number) in moves {
        let (status, game) = play(&app, &id, player_number, tile_number).await;
        assert_eq!(status, StatusCode::CREATED);
        last = game;
    }

    assert_eq!(last["status"], "draw");
    assert!(last["winning_player_number"].is_null());
    assert!(last["next_player_number"].is_null());
    assert_eq!(last["moves"].as_array().unwrap().len(), 9);
}
