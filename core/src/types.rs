use core::fmt;

use smallvec::SmallVec;

/// Single coordinate axis used for array rows/columns and logical sizes.
pub type Coord = u16;

/// Count type used for cell totals and step counters.
pub type CellCount = u32;

/// Two-dimensional array coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Largest logical row/column count whose array dimension `2n+1` still fits in a [`Coord`].
pub const MAX_LOGICAL: Coord = (Coord::MAX - 1) / 2;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Compass direction of a move, in array terms (`Up` decreases the row).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Set of directions that are currently legal from some cell, never more than four.
pub type Directions = SmallVec<[Direction; 4]>;

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Moves `coords` by `steps` in `direction`, returning a value only when it stays below `bounds`.
pub(crate) fn apply_steps(
    coords: Coord2,
    direction: Direction,
    steps: isize,
    bounds: Coord2,
) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = direction.delta();
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed((d_row * steps).try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed((d_col * steps).try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_steps_rejects_underflow_and_overflow() {
        assert_eq!(apply_steps((1, 1), Direction::Up, 2, (5, 5)), None);
        assert_eq!(apply_steps((1, 1), Direction::Left, 2, (5, 5)), None);
        assert_eq!(apply_steps((3, 3), Direction::Down, 2, (5, 5)), None);
        assert_eq!(apply_steps((3, 3), Direction::Right, 2, (5, 5)), None);
    }

    #[test]
    fn apply_steps_moves_in_bounds() {
        assert_eq!(apply_steps((1, 1), Direction::Down, 2, (5, 5)), Some((3, 1)));
        assert_eq!(apply_steps((1, 1), Direction::Right, 1, (5, 5)), Some((1, 2)));
        assert_eq!(apply_steps((3, 3), Direction::Up, 2, (5, 5)), Some((1, 3)));
    }

    #[test]
    fn max_logical_fits_array_dimension() {
        let dim = u32::from(MAX_LOGICAL) * 2 + 1;
        assert!(dim <= u32::from(Coord::MAX));
    }
}
