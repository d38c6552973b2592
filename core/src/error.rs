use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {height}x{width}, both must be between 1 and {max}", max = crate::MAX_LOGICAL)]
    InvalidDimension { height: i64, width: i64 },
    #[error("No legal move found while {remaining} cells are still unvisited")]
    InternalInvariantViolation { remaining: CellCount },
}

pub type Result<T> = core::result::Result<T, MazeError>;
