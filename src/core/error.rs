use thiserror::Error;

/// Reasons a move or coordinate was rejected by the checked API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell index {0} is outside the board")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("the game has already ended")]
    GameOver,

    #[error("coordinate ({row}, {column}) is outside the board")]
    CoordinateOutOfRange { row: usize, column: usize },
}
