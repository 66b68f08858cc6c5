use serde::{Deserialize, Serialize};

use super::{Cell, Player};
use crate::error::BoardError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Board size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Dimensions { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Grid of cells with fixed dimensions.
///
/// Row 0 is the bottom of every column; a dropped piece comes to rest on the
/// lowest empty row. The board knows nothing about turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Fails unless both sides are positive and the
    /// cell count fits in memory.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or_else(|| invalid.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Empty);
        Ok(Board {
            width,
            height,
            cells,
        })
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Result<Self, BoardError> {
        Board::new(dimensions.width, dimensions.height)
    }

    /// Empty board of the same size
    pub(super) fn cleared(&self) -> Self {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether (row, column) addresses a cell of this board
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        if !self.contains(row, column) {
            return Err(BoardError::OutOfRange {
                row,
                column,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + column)
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Get the occupant of the cell at (row, column)
    pub fn occupant_at(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx])
    }

    /// Lowest empty row in `column`, or `None` if the column is full
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        self.check_column(column)?;
        Ok((0..self.height).find(|&row| self.cells[row * self.width + column].is_empty()))
    }

    /// Mark an empty cell as occupied by `player`
    pub fn place(&mut self, row: usize, column: usize, player: Player) -> Result<(), BoardError> {
        let idx = self.index(row, column)?;
        if !self.cells[idx].is_empty() {
            return Err(BoardError::CellOccupied { row, column });
        }
        self.cells[idx] = player.to_cell();
        Ok(())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> Result<bool, BoardError> {
        Ok(self.find_landing_row(column)?.is_none())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Step `(d_row, d_col)` away from (row, column), or `None` if that
    /// leaves the board.
    pub fn offset(
        &self,
        row: usize,
        column: usize,
        d_row: isize,
        d_col: isize,
    ) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(d_row)?;
        let column = column.checked_add_signed(d_col)?;
        self.contains(row, column).then_some((row, column))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}
