use crate::*;
pub use hunt_and_kill::*;

mod hunt_and_kill;

/// Mode the generator used for its most recent step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeneratorState {
    /// Extending the walk from the cursor.
    Walking,
    /// The walk dead-ended and the cursor was relocated by scanning the grid.
    Hunting,
    Done,
}

impl GeneratorState {
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::Walking
    }
}

/// One carve: the wall between `from` and `to` was broken and `to` opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Coord2,
    pub direction: Direction,
    pub to: Coord2,
    /// Whether `from` was found by a hunt scan rather than being the previous cursor.
    pub hunted: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Move),
    Done,
}

impl StepOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Moved(_) => true,
            Self::Done => false,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub moves: CellCount,
    pub hunts: CellCount,
    /// Logical cells inspected across all hunt scans.
    pub hunt_scanned: u64,
}
