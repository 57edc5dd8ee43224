use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::services::errors::tictactoe_service_errors::InvalidMoveError;

#[derive(Debug)]
pub enum GameServiceError {
    GameNotFound(String),
    InvalidMove(InvalidMoveError),
    ValidationError(String),
    RepositoryError(GameRepositoryError),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::GameNotFound(game_id) => {
                write!(f, "Game ID \"{}\" not found!", game_id)
            }
            GameServiceError::InvalidMove(err) => write!(f, "{}", err),
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::RepositoryError(err) => write!(f, "Repository error: {}", err),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        match err {
            GameRepositoryError::NotFound(game_id) => GameServiceError::GameNotFound(game_id),
            other => GameServiceError::RepositoryError(other),
        }
    }
}

impl From<InvalidMoveError> for GameServiceError {
    fn from(err: InvalidMoveError) -> Self {
        GameServiceError::InvalidMove(err)
    }
}
