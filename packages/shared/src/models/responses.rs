use serde::{Deserialize, Serialize};

use crate::models::game::Game;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesResponse {
    pub games: Vec<Game>,
}

/// Problem-style error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub status: u16,
    pub title: String,
}
