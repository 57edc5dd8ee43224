use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_item};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// Storage contract for game documents. Implementations own id assignment.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn list_games(&self) -> Result<Vec<Game>, GameRepositoryError>;
    async fn get_game(&self, game_id: &str) -> Result<Game, GameRepositoryError>;
    async fn insert_game(&self, game: Game) -> Result<Game, GameRepositoryError>;
    async fn update_game(&self, game: Game) -> Result<Game, GameRepositoryError>;
}

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

fn game_key(game_id: &str) -> AttributeValue {
    AttributeValue::S(game_id.to_string())
}

fn to_game_item(game: &Game) -> Result<HashMap<String, AttributeValue>, GameRepositoryError> {
    to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
}

fn from_game_item(item: HashMap<String, AttributeValue>) -> Result<Game, GameRepositoryError> {
    from_item(item).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn list_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let mut games = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

            for item in output.items.unwrap_or_default() {
                games.push(from_game_item(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        debug!("Scanned {} games from {}", games.len(), self.table_name);
        Ok(games)
    }

    async fn get_game(&self, game_id: &str) -> Result<Game, GameRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", game_key(game_id))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        match output.item {
            Some(item) => from_game_item(item),
            None => Err(GameRepositoryError::NotFound(game_id.to_string())),
        }
    }

    async fn insert_game(&self, mut game: Game) -> Result<Game, GameRepositoryError> {
        game.id = Some(Uuid::new_v4().to_string());
        let item = to_game_item(&game)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        Ok(game)
    }

    async fn update_game(&self, game: Game) -> Result<Game, GameRepositoryError> {
        let game_id = game.id.clone().unwrap_or_default();
        let item = to_game_item(&game)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| match e.as_service_error() {
                Some(service_error) if service_error.is_conditional_check_failed_exception() => {
                    GameRepositoryError::NotFound(game_id.clone())
                }
                _ => GameRepositoryError::DynamoDb(e.to_string()),
            })?;

        Ok(game)
    }
}
