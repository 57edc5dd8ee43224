use crate::models::game::GameStatus;

/// Reasons a move is rejected. The game is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    GameNotInProgress { game_id: String, status: GameStatus },
    WrongTurn { expected: Option<u8>, found: u8 },
    TileAlreadyPlayed { tile_number: u8 },
}

impl std::fmt::Display for InvalidMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveError::GameNotInProgress { game_id, status } => write!(
                f,
                "Game ID ({}) is not in progress anymore, current status is ({})!",
                game_id, status
            ),
            InvalidMoveError::WrongTurn { expected, found } => {
                let expected = expected.map_or_else(|| "none".to_string(), |n| n.to_string());
                write!(
                    f,
                    "Expecting player number ({}) to make a move but found player number ({}) instead!",
                    expected, found
                )
            }
            InvalidMoveError::TileAlreadyPlayed { tile_number } => {
                write!(f, "Tile number ({}) was already played!", tile_number)
            }
        }
    }
}

impl std::error::Error for InvalidMoveError {}
