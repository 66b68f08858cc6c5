use serde::Serialize;
use tracing::{debug, error, info};

use super::win::{find_winning_run, WinningRun};
use super::{Board, Cell, Dimensions, Player};
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Why a drop was refused. A rejected drop never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    ColumnOutOfRange,
    #[error("game is already over")]
    GameAlreadyOver,
}

/// Result of a single [`Game::drop_piece`] command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    Placed {
        row: usize,
        column: usize,
        next_player: Player,
    },
    Won {
        player: Player,
        row: usize,
        column: usize,
    },
    Draw,
    Rejected {
        reason: RejectReason,
    },
}

impl MoveOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Draw)
    }
}

/// A single Connect Four game: owns the board, turn order and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_run: Option<WinningRun>,
    moves_played: usize,
}

impl Game {
    /// Standard 7x6 game, Player 1 to move
    pub fn new() -> Self {
        Game::from_board(Board::default())
    }

    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Game::from_board(Board::new(width, height)?))
    }

    pub fn from_dimensions(dimensions: Dimensions) -> Result<Self, BoardError> {
        Ok(Game::from_board(Board::with_dimensions(dimensions)?))
    }

    fn from_board(board: Board) -> Self {
        Game {
            board,
            current_player: Player::One,
            status: GameStatus::InProgress,
            winning_run: None,
            moves_played: 0,
        }
    }

    /// Start over on an empty board of the same size
    pub fn reset(&mut self) {
        let dimensions = self.board.dimensions();
        *self = Game::from_board(self.board.cleared());
        debug!(width = dimensions.width, height = dimensions.height, "game reset");
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    pub fn occupant_at(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.board.occupant_at(row, column)
    }

    /// The four cells that ended the game, once someone has won
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning_run.as_ref()
    }

    /// Number of accepted drops so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Columns that would accept a drop right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| self.board.is_column_full(col) == Ok(false))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    pub fn drop_piece(&mut self, column: usize) -> MoveOutcome {
        match self.try_drop(column) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(column, %reason, player = %self.current_player, "drop rejected");
                MoveOutcome::Rejected { reason }
            }
        }
    }

    fn try_drop(&mut self, column: usize) -> Result<MoveOutcome, RejectReason> {
        if self.is_terminal() {
            return Err(RejectReason::GameAlreadyOver);
        }

        let landing = self
            .board
            .find_landing_row(column)
            .map_err(|err| match err {
                BoardError::ColumnOutOfRange { .. } => RejectReason::ColumnOutOfRange,
                err => unreachable!("landing row lookup failed unexpectedly: {err}"),
            })?;
        let row = landing.ok_or(RejectReason::ColumnFull)?;

        let player = self.current_player;
        if let Err(err) = self.board.place(row, column, player) {
            error!(row, column, %err, "landing cell could not be filled");
            unreachable!("landing cell ({row}, {column}) rejected placement: {err}");
        }
        self.moves_played += 1;
        debug!(row, column, %player, "piece placed");

        if let Some(run) = find_winning_run(&self.board, player) {
            info!(%player, direction = ?run.direction, moves = self.moves_played, "game won");
            self.status = GameStatus::Won(player);
            self.winning_run = Some(run);
            return Ok(MoveOutcome::Won {
                player,
                row,
                column,
            });
        }

        if self.board.is_full() {
            info!(moves = self.moves_played, "game drawn");
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Placed {
            row,
            column,
            next_player: self.current_player,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
