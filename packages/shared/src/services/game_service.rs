use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    models::{
        game::{Game, BOARD_SIZE, PLAYER_ONE, PLAYER_TWO},
        requests::{CreateGameRequest, MoveRequest},
    },
    repositories::game_repository::GameRepository,
    services::{
        errors::game_service_errors::GameServiceError, tictactoe_service::TicTacToeService,
    },
};

#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    rules: TicTacToeService,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameService {
            repository,
            rules: TicTacToeService::new(),
        }
    }

    pub async fn list_games(&self) -> Result<Vec<Game>, GameServiceError> {
        self.repository
            .list_games()
            .await
            .map_err(GameServiceError::from)
    }

    pub async fn create_game(&self, request: &CreateGameRequest) -> Result<Game, GameServiceError> {
        if request.players.len() != 2 {
            return Err(GameServiceError::ValidationError(format!(
                "A game needs exactly 2 players, got {}",
                request.players.len()
            )));
        }
        if request.players.iter().any(|p| p.name.trim().is_empty()) {
            return Err(GameServiceError::ValidationError(
                "Player name cannot be empty".to_string(),
            ));
        }

        let game = self.rules.initialize_game(&request.players);
        let game = self.repository.insert_game(game).await?;
        info!("Created game {:?}", game.id);
        Ok(game)
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        if game_id.is_empty() {
            return Err(GameServiceError::ValidationError(
                "Game ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_game(game_id)
            .await
            .map_err(GameServiceError::from)
    }

    /// Load the game, apply the move and persist the result.
    /// Nothing is written when the move is rejected.
    pub async fn make_move(
        &self,
        game_id: &str,
        move_request: &MoveRequest,
    ) -> Result<Game, GameServiceError> {
        if !(PLAYER_ONE..=PLAYER_TWO).contains(&move_request.player_number) {
            return Err(GameServiceError::ValidationError(format!(
                "Player number must be {} or {}, got {}",
                PLAYER_ONE, PLAYER_TWO, move_request.player_number
            )));
        }
        if !(1..=BOARD_SIZE as u8).contains(&move_request.tile_number) {
            return Err(GameServiceError::ValidationError(format!(
                "Tile number must be between 1 and {}, got {}",
                BOARD_SIZE, move_request.tile_number
            )));
        }

        let mut game = self.get_game(game_id).await?;
        if let Err(e) = self.rules.apply_move(&mut game, move_request) {
            warn!("Rejected move on game {}: {}", game_id, e);
            return Err(e.into());
        }

        let game = self.repository.update_game(game).await?;
        info!(
            "Player {} played tile {} in game {} ({})",
            move_request.player_number, move_request.tile_number, game_id, game.status
        );
        Ok(game)
    }
}
