//! The 3×3 grid of cells.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

use super::error::MoveError;
use super::player::{Cell, Player};
use crate::rules::{Line, CELL_COUNT, SIDE};

/// Indices of empty cells, in ascending order.
pub type EmptyIndices = SmallVec<[usize; CELL_COUNT]>;

/// Nine cells in row-major order (`index = 3 * row + column`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a row and column to a cell index.
    ///
    /// Panics if either coordinate is outside `0..3`.
    ///
    /// ```
    /// use tictactoe_engine::core::Board;
    ///
    /// assert_eq!(Board::index(0, 0), 0);
    /// assert_eq!(Board::index(1, 2), 5);
    /// assert_eq!(Board::index(2, 2), 8);
    /// ```
    #[must_use]
    pub fn index(row: usize, column: usize) -> usize {
        assert!(
            row < SIDE && column < SIDE,
            "Coordinate ({row}, {column}) out of range"
        );
        SIDE * row + column
    }

    /// Checked form of [`Board::index`].
    pub fn try_index(row: usize, column: usize) -> Result<usize, MoveError> {
        if row < SIDE && column < SIDE {
            Ok(SIDE * row + column)
        } else {
            Err(MoveError::CoordinateOutOfRange { row, column })
        }
    }

    /// Get a cell by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index].is_empty()
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Indices of all empty cells.
    #[must_use]
    pub fn empty_indices(&self) -> EmptyIndices {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether all three cells of `line` hold `player`.
    #[must_use]
    pub fn is_complete(&self, line: Line, player: Player) -> bool {
        line.iter().all(|&i| self.cells[i] == Cell::Occupied(player))
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..SIDE {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[SIDE * row + column])?;
            }
        }
        Ok(())
    }
}
