//! Core Connect Four game logic: the board, players, win detection, and the
//! game state machine that ties them together.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::{Cell, Player};
pub use state::{Game, GameStatus, MoveOutcome, RejectReason};
pub use win::{find_winning_run, Direction, WinningRun, RUN_LENGTH};
