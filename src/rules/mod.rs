//! Game rules independent of any particular position.
//!
//! - Winning-line geometry and the lines through each cell
//! - The set of cells forming a completed line
//! - Final game outcome

pub mod lines;
pub mod result;

pub use lines::{lines_through, Line, Lines, WinningLine, CELL_COUNT, LINES, SIDE};
pub use result::GameResult;
