use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Hunt-and-kill maze generator.
///
/// Walks randomly from the cursor into unvisited cells, carving as it goes. When the walk gets stuck it scans the
/// grid row by row for the first visited cell that still borders an unvisited one and continues from there. The
/// result is a spanning tree over every logical cell.
#[derive(Clone, Debug)]
pub struct HuntAndKill<R> {
    grid: Grid,
    cursor: Coord2,
    state: GeneratorState,
    stats: GenerationStats,
    rng: R,
}

impl HuntAndKill<SmallRng> {
    pub fn from_seed(grid: Grid, seed: u64) -> Self {
        Self::new(grid, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HuntAndKill<R> {
    pub fn new(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            cursor: SEED_CELL,
            state: Default::default(),
            stats: Default::default(),
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Carves a single passage, hunting for a new start first if the cursor is stuck.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.state.is_done() {
            return Ok(StepOutcome::Done);
        }

        let remaining = self.grid.count_unvisited();
        if remaining == 0 {
            self.state = GeneratorState::Done;
            log::debug!(
                "Maze complete after {} moves and {} hunts",
                self.stats.moves,
                self.stats.hunts
            );
            return Ok(StepOutcome::Done);
        }

        let mut legal = self.grid.legal_directions(self.cursor);
        let hunted = legal.is_empty();
        if hunted {
            let Some((start, start_legal)) = self.hunt() else {
                log::error!(
                    "Hunt found no cell to resume from, {} cells unreachable",
                    remaining
                );
                return Err(MazeError::InternalInvariantViolation { remaining });
            };
            log::debug!("Dead end at {:?}, resuming at {:?}", self.cursor, start);
            self.cursor = start;
            self.stats.hunts += 1;
            legal = start_legal;
        }

        let direction = legal[self.rng.random_range(0..legal.len())];
        let from = self.cursor;
        let to = self.grid.open_path(from, direction);
        log::trace!("Carved {} from {:?} to {:?}", direction, from, to);

        self.cursor = to;
        self.stats.moves += 1;
        self.state = if hunted {
            GeneratorState::Hunting
        } else {
            GeneratorState::Walking
        };

        Ok(StepOutcome::Moved(Move {
            from,
            direction,
            to,
            hunted,
        }))
    }

    /// First visited cell in row-major order with at least one legal move, along with those moves.
    fn hunt(&mut self) -> Option<(Coord2, Directions)> {
        for coords in self.grid.logical_cells() {
            self.stats.hunt_scanned += 1;
            if !self.grid[coords].is_open() {
                continue;
            }
            let legal = self.grid.legal_directions(coords);
            if !legal.is_empty() {
                return Some((coords, legal));
            }
        }
        None
    }

    /// Runs to completion, handing a snapshot to `sink` after every move.
    pub fn generate<S>(&mut self, sink: &mut S) -> core::result::Result<GenerationStats, S::Error>
    where
        S: RenderSink,
        S::Error: From<MazeError>,
    {
        while self.step()?.has_update() {
            sink.render(&self.grid)?;
        }
        Ok(self.stats)
    }

    /// Runs to completion without rendering.
    pub fn finish(&mut self) -> Result<GenerationStats> {
        self.generate(&mut |_: &Grid| {})
    }
}
