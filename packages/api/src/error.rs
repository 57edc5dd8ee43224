use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::responses::ErrorResponse;
use shared::services::errors::game_service_errors::GameServiceError;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
    BadRequest(String),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::GameService(
                GameServiceError::InvalidMove(_) | GameServiceError::ValidationError(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::GameNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                "The game store is unavailable, please retry later".to_string()
            }
            ApiError::GameService(GameServiceError::ValidationError(msg)) => msg.clone(),
            ApiError::GameService(err) => err.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        }

        let body = ErrorResponse {
            detail: self.detail(),
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
        };

        (status, Json(body)).into_response()
    }
}
