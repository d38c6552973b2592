#![no_std]

extern crate alloc;

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod render;
mod types;

/// Logical maze size in cells, not array positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub height: Coord,
    pub width: Coord,
}

impl MazeConfig {
    pub(crate) const fn new_unchecked(height: Coord, width: Coord) -> Self {
        Self { height, width }
    }

    /// Validates a requested `height x width` maze, rejecting empty and oversized ones.
    pub fn new(height: i64, width: i64) -> Result<Self> {
        let invalid = MazeError::InvalidDimension { height, width };
        let check = |value: i64| match Coord::try_from(value) {
            Ok(value) if (1..=MAX_LOGICAL).contains(&value) => Ok(value),
            _ => Err(invalid),
        };
        Ok(Self::new_unchecked(check(height)?, check(width)?))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    /// Array dimensions `(2H+1, 2W+1)` backing this maze.
    pub const fn grid_dim(&self) -> Coord2 {
        (self.height * 2 + 1, self.width * 2 + 1)
    }
}
