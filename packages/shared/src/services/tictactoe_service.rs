use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::{
    models::{
        game::{Game, GameStatus, Move, Player, PLAYER_ONE, PLAYER_TWO},
        requests::{MoveRequest, NewPlayer},
    },
    services::errors::tictactoe_service_errors::InvalidMoveError,
};

/// Rows, columns and diagonals of the board, numbered 1-9 left to right, top to bottom.
pub const WINNING_LINES: [[u8; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Pure game rules: creates games and validates and applies moves.
#[derive(Clone, Default)]
pub struct TicTacToeService;

impl TicTacToeService {
    pub fn new() -> Self {
        TicTacToeService
    }

    /// Start a game between two players, shuffling who becomes player 1.
    pub fn initialize_game(&self, players: &[NewPlayer]) -> Game {
        self.initialize_game_with_rng(players, &mut rand::thread_rng())
    }

    pub fn initialize_game_with_rng<R: Rng + ?Sized>(
        &self,
        players: &[NewPlayer],
        rng: &mut R,
    ) -> Game {
        let mut numbers = [PLAYER_ONE, PLAYER_TWO];
        numbers.shuffle(rng);

        let players = players
            .iter()
            .zip(numbers)
            .map(|(player, number)| Player::new(&player.name, number))
            .collect();

        Game::new(players)
    }

    /// Validate and make a move on the game.
    /// Updates moves, turn and status. The game is untouched when the move is rejected.
    pub fn apply_move(
        &self,
        game: &mut Game,
        move_request: &MoveRequest,
    ) -> Result<(), InvalidMoveError> {
        self.validate_move(game, move_request)?;

        let now = Utc::now();
        game.last_update_time = now;
        game.moves.push(Move {
            player_number: move_request.player_number,
            tile_number: move_request.tile_number,
            create_time: now,
        });
        game.next_player_number = Some(other_player(move_request.player_number));

        if self.check_player_won(game, move_request.player_number, move_request.tile_number) {
            debug!(
                "Player {} won game {:?} with tile {}",
                move_request.player_number, game.id, move_request.tile_number
            );
        } else if game.is_board_full() {
            game.next_player_number = None;
            game.status = GameStatus::Draw;
        }

        Ok(())
    }

    fn validate_move(&self, game: &Game, move_request: &MoveRequest) -> Result<(), InvalidMoveError> {
        if !game.is_in_progress() {
            return Err(InvalidMoveError::GameNotInProgress {
                game_id: game.id.clone().unwrap_or_default(),
                status: game.status,
            });
        }

        if game.next_player_number != Some(move_request.player_number) {
            return Err(InvalidMoveError::WrongTurn {
                expected: game.next_player_number,
                found: move_request.player_number,
            });
        }

        if game.is_tile_played(move_request.tile_number) {
            return Err(InvalidMoveError::TileAlreadyPlayed {
                tile_number: move_request.tile_number,
            });
        }

        Ok(())
    }

    /// Finish the game if `tile_number` completed a line for `player_number`.
    ///
    /// Only lines through the latest tile can have just been completed, so those
    /// are the only ones checked. Running this again on a won game is a no-op.
    pub fn check_player_won(&self, game: &mut Game, player_number: u8, tile_number: u8) -> bool {
        let player_tiles = game.tiles_of(player_number);

        let has_won = WINNING_LINES
            .iter()
            .filter(|line| line.contains(&tile_number))
            .any(|line| line.iter().all(|tile| player_tiles.contains(tile)));

        if has_won {
            game.winning_player_number = Some(player_number);
            game.next_player_number = None;
            game.status = GameStatus::Done;
        }

        has_won
    }
}

fn other_player(player_number: u8) -> u8 {
    if player_number == PLAYER_TWO {
        PLAYER_ONE
    } else {
        PLAYER_TWO
    }
}
