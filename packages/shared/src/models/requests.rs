use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub players: Vec<NewPlayer>,
}

impl CreateGameRequest {
    pub fn new(first: &str, second: &str) -> Self {
        CreateGameRequest {
            players: vec![
                NewPlayer {
                    name: first.to_string(),
                },
                NewPlayer {
                    name: second.to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub player_number: u8,
    pub tile_number: u8,
}

impl MoveRequest {
    pub fn new(player_number: u8, tile_number: u8) -> Self {
        MoveRequest {
            player_number,
            tile_number,
        }
    }
}
