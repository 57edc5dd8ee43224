use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::game_repository::GameRepository;

/// Process-local store for development and tests. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn list_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let games = self.games.read().await;
        Ok(games.values().cloned().collect())
    }

    async fn get_game(&self, game_id: &str) -> Result<Game, GameRepositoryError> {
        let games = self.games.read().await;
        games
            .get(game_id)
            .cloned()
            .ok_or_else(|| GameRepositoryError::NotFound(game_id.to_string()))
    }

    async fn insert_game(&self, mut game: Game) -> Result<Game, GameRepositoryError> {
        let game_id = Uuid::new_v4().to_string();
        game.id = Some(game_id.clone());

        let mut games = self.games.write().await;
        games.insert(game_id, game.clone());
        Ok(game)
    }

    async fn update_game(&self, game: Game) -> Result<Game, GameRepositoryError> {
        let game_id = game.id.clone().unwrap_or_default();

        let mut games = self.games.write().await;
        if !games.contains_key(&game_id) {
            return Err(GameRepositoryError::NotFound(game_id));
        }
        games.insert(game_id, game.clone());
        Ok(game)
    }
}
