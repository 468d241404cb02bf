//! Winning-line geometry.
//!
//! The board is indexed row-major:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//!
//! A win is three identical marks along one of the 8 [`LINES`]. After a move
//! only the lines through the played index can have changed, so win detection
//! looks at [`lines_through`] (2 to 4 lines) instead of the whole table.

use serde::Serialize;
use smallvec::SmallVec;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// Three cell indices that win when uniformly occupied.
pub type Line = [usize; 3];

/// Lines passing through a single cell.
pub type Lines = SmallVec<[Line; 4]>;

/// Main diagonal (row == column).
pub const MAIN_DIAGONAL: Line = [0, 4, 8];

/// Anti-diagonal (row + column == 2).
pub const ANTI_DIAGONAL: Line = [2, 4, 6];

/// All 8 winning lines: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

/// The lines passing through `index`.
///
/// Always the row and the column; the main diagonal when `row == column`,
/// the anti-diagonal when `row + column == 2`. The center is on all four.
///
/// ```
/// use tictactoe_engine::rules::lines_through;
///
/// assert_eq!(lines_through(1).len(), 2);
/// assert_eq!(lines_through(0).len(), 3);
/// assert_eq!(lines_through(4).len(), 4);
/// ```
#[must_use]
pub fn lines_through(index: usize) -> Lines {
    assert!(index < CELL_COUNT, "Cell index {index} out of range");

    let (row, column) = (index / SIDE, index % SIDE);
    let row_start = SIDE * row;

    let mut lines = Lines::new();
    lines.push([row_start, row_start + 1, row_start + 2]);
    lines.push([column, column + SIDE, column + 2 * SIDE]);
    if row == column {
        lines.push(MAIN_DIAGONAL);
    }
    if row + column == SIDE - 1 {
        lines.push(ANTI_DIAGONAL);
    }
    lines
}

/// Set of cell indices belonging to completed lines.
///
/// Stored as a 9-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine(u16);

impl WinningLine {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < CELL_COUNT && self.0 & (1 << index) != 0
    }

    /// Add every cell of `line`.
    pub fn insert_line(&mut self, line: Line) {
        for index in line {
            self.0 |= 1 << index;
        }
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterate member indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..CELL_COUNT).filter(move |&index| self.contains(index))
    }
}

impl FromIterator<usize> for WinningLine {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            assert!(index < CELL_COUNT, "Cell index {index} out of range");
            set.0 |= 1 << index;
        }
        set
    }
}
