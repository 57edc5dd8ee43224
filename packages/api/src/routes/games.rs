use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::models::{
    game::Game,
    requests::{CreateGameRequest, MoveRequest},
    responses::GamesResponse,
};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(get_games).post(create_game))
        .route("/games/{game_id}", get(get_game))
        .route("/games/{game_id}/moves", post(create_move))
}

async fn get_games(State(state): State<AppState>) -> Result<Json<GamesResponse>, ApiError> {
    let games = state.game_service.list_games().await?;
    Ok(Json(GamesResponse { games }))
}

async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let Json(request) = payload?;
    let game = state.game_service.create_game(&request).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    state
        .game_service
        .get_game(&game_id)
        .await
        .map(Json)
        .map_err(|e| {
            debug!("Failed to retrieve game {}: {}", game_id, e);
            ApiError::from(e)
        })
}

async fn create_move(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let Json(move_request) = payload?;
    let game = state.game_service.make_move(&game_id, &move_request).await?;
    Ok((StatusCode::CREATED, Json(game)))
}
