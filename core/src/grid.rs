use alloc::collections::{BTreeSet, VecDeque};
use core::fmt;
use core::ops::Index;

use ndarray::{Array2, ArrayView1};

use crate::*;

/// Cell-state array of a maze in progress, `(2H+1) x (2W+1)` positions.
///
/// Logical cells sit on odd rows and odd columns, everything else is a wall slot or border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    config: MazeConfig,
    cells: Array2<Cell>,
}

/// Position every generation starts from.
pub const SEED_CELL: Coord2 = (1, 1);

impl Grid {
    pub fn new(config: MazeConfig) -> Self {
        let (rows, cols) = config.grid_dim();
        let mut cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            if row % 2 == 1 && col % 2 == 1 {
                Cell::Unvisited
            } else {
                Cell::Wall
            }
        });
        cells[SEED_CELL.to_nd_index()] = Cell::Open;

        Self { config, cells }
    }

    pub fn with_size(height: i64, width: i64) -> Result<Self> {
        Ok(Self::new(MazeConfig::new(height, width)?))
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    /// Array dimensions `(rows, cols)`, including the border.
    pub fn dim(&self) -> Coord2 {
        self.config.grid_dim()
    }

    pub(crate) fn set_cell(&mut self, coords: Coord2, cell: Cell) {
        self.cells[coords.to_nd_index()] = cell;
    }

    /// Row-major rows of the whole array, for drawing.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    /// Logical cell positions in row-major order.
    pub fn logical_cells(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.dim();
        (1..rows)
            .step_by(2)
            .flat_map(move |row| (1..cols).step_by(2).map(move |col| (row, col)))
    }

    /// Position `steps` away from `coords`, if it lies in `[1, dim-2]` on both axes.
    fn interior_step(&self, coords: Coord2, direction: Direction, steps: isize) -> Option<Coord2> {
        let (rows, cols) = self.dim();
        apply_steps(coords, direction, steps, (rows - 1, cols - 1))
            .filter(|&(row, col)| row >= 1 && col >= 1)
    }

    pub fn is_legal_move(&self, coords: Coord2, direction: Direction) -> bool {
        self.interior_step(coords, direction, 2)
            .is_some_and(|target| self[target].is_unvisited())
    }

    pub fn legal_directions(&self, coords: Coord2) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_legal_move(coords, direction))
            .collect()
    }

    /// Breaks the wall one step away and opens the cell two steps away, returning the latter.
    ///
    /// Panics if the move is not legal, callers are expected to check [`Grid::is_legal_move`] first.
    pub fn open_path(&mut self, coords: Coord2, direction: Direction) -> Coord2 {
        let Some(target) = self
            .interior_step(coords, direction, 2)
            .filter(|&target| self[target].is_unvisited())
        else {
            panic!("illegal move {direction} from {coords:?}");
        };
        let wall = midpoint(coords, target);

        self.set_cell(wall, Cell::Open);
        self.set_cell(target, Cell::Open);
        target
    }

    pub fn count_unvisited(&self) -> CellCount {
        self.logical_cells()
            .filter(|&coords| self[coords].is_unvisited())
            .count() as CellCount
    }

    pub fn is_complete(&self) -> bool {
        self.count_unvisited() == 0
    }

    /// Logical cells reachable from `coords` through a single broken wall.
    pub fn passages_from(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            let target = self.interior_step(coords, direction, 2)?;
            self[midpoint(coords, target)]
                .is_open()
                .then_some(target)
        })
    }

    /// Number of wall slots between two logical cells that have been broken.
    pub fn broken_wall_count(&self) -> CellCount {
        self.logical_cells()
            .flat_map(|coords| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter_map(move |direction| self.interior_step(coords, direction, 2))
                    .map(move |target| midpoint(coords, target))
            })
            .filter(|&wall| self[wall].is_open())
            .count() as CellCount
    }

    /// Whether open cells and broken walls form a spanning tree over every logical cell.
    pub fn is_spanning_tree(&self) -> bool {
        let total = self.config.total_cells();
        if !self.is_complete() || self.broken_wall_count() != total - 1 {
            return false;
        }

        let mut visited = BTreeSet::from([SEED_CELL]);
        let mut to_visit = VecDeque::from([SEED_CELL]);
        while let Some(coords) = to_visit.pop_front() {
            for next in self.passages_from(coords) {
                if visited.insert(next) {
                    to_visit.push_back(next);
                }
            }
        }

        visited.len() == total as usize
    }
}

/// Slot halfway between two cells on the same row or column.
fn midpoint(a: Coord2, b: Coord2) -> Coord2 {
    let half = |x: Coord, y: Coord| x.min(y) + x.abs_diff(y) / 2;
    (half(a.0, b.0), half(a.1, b.1))
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row.iter() {
                f.write_str(cell.glyph())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
