use thiserror::Error;

use super::board::BOARD_AREA;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    #[error("cell {index} is already marked")]
    Occupied { index: usize },
    #[error("cell {index} is outside the board of {} cells", BOARD_AREA)]
    OutOfBounds { index: usize },
}

/// Caller input rejected before it reaches the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBoardError {
    #[error("side labels must be non-empty and distinct")]
    Labels,
    #[error("board must have {expected} cells, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("both sides have a completed line")]
    BothSidesWin,
    #[error("mark counts {side_a} (first side) and {side_b} (second side) cannot occur by alternating turns")]
    TurnOrder { side_a: usize, side_b: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveServiceError {
    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoardError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}
