//! Four-in-a-row detection by full board rescan.

use serde::Serialize;

use super::{Board, Player};

/// Number of aligned pieces needed to win.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, /
    DiagonalUp,
    /// Top-left to bottom-right, \
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row, column) step between consecutive cells of a run
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }
}

/// Coordinates of a completed four-in-a-row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningRun {
    pub player: Player,
    pub direction: Direction,
    pub cells: [(usize, usize); RUN_LENGTH],
}

impl WinningRun {
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.contains(&(row, column))
    }
}

/// Scan every cell and direction for a run of `player` pieces.
///
/// Bounds are checked before each read, so runs starting near an edge are
/// simply skipped.
pub fn find_winning_run(board: &Board, player: Player) -> Option<WinningRun> {
    let target = player.to_cell();

    for row in 0..board.height() {
        for column in 0..board.width() {
            for direction in Direction::ALL {
                let Some(cells) = run_from(board, row, column, direction) else {
                    continue;
                };
                let owned = cells
                    .iter()
                    .all(|&(r, c)| board.occupant_at(r, c) == Ok(target));
                if owned {
                    return Some(WinningRun {
                        player,
                        direction,
                        cells,
                    });
                }
            }
        }
    }

    None
}

/// The in-bounds run starting at (row, column), if it fits on the board
fn run_from(
    board: &Board,
    row: usize,
    column: usize,
    direction: Direction,
) -> Option<[(usize, usize); RUN_LENGTH]> {
    let (d_row, d_col) = direction.delta();
    let mut cells = [(row, column); RUN_LENGTH];
    for step in 1..RUN_LENGTH {
        cells[step] = board.offset(row, column, d_row * step as isize, d_col * step as isize)?;
    }
    Some(cells)
}
