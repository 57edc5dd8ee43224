use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const PLAYER_ONE: u8 = 1;
pub const PLAYER_TWO: u8 = 2;
pub const BOARD_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    X,
    O,
}

impl Sign {
    /// Player 1 always plays X, player 2 always plays O.
    pub fn for_player(number: u8) -> Self {
        if number == PLAYER_ONE {
            Sign::X
        } else {
            Sign::O
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Done,
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Done => write!(f, "done"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub number: u8,
    pub sign: Sign,
}

impl Player {
    pub fn new(name: &str, number: u8) -> Self {
        Player {
            name: name.to_string(),
            number,
            sign: Sign::for_player(number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub player_number: u8,
    pub tile_number: u8,
    pub create_time: DateTime<Utc>,
}

/// A single tic-tac-toe match, persisted as one document per game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Assigned by the repository on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub players: Vec<Player>,
    pub create_time: DateTime<Utc>,
    pub last_update_time: DateTime<Utc>,
    pub status: GameStatus,
    pub next_player_number: Option<u8>,
    pub winning_player_number: Option<u8>,
    pub moves: Vec<Move>,
}

impl Game {
    pub fn new(players: Vec<Player>) -> Self {
        let now = Utc::now();
        Game {
            id: None,
            players,
            create_time: now,
            last_update_time: now,
            status: GameStatus::InProgress,
            // Whoever drew number 1 always opens
            next_player_number: Some(PLAYER_ONE),
            winning_player_number: None,
            moves: vec![],
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn is_tile_played(&self, tile_number: u8) -> bool {
        self.moves.iter().any(|m| m.tile_number == tile_number)
    }

    /// Tiles claimed so far by the given player.
    pub fn tiles_of(&self, player_number: u8) -> HashSet<u8> {
        self.moves
            .iter()
            .filter(|m| m.player_number == player_number)
            .map(|m| m.tile_number)
            .collect()
    }

    pub fn is_board_full(&self) -> bool {
        self.moves.len() >= BOARD_SIZE
    }

    pub fn player(&self, number: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.number == number)
    }
}
