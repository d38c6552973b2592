/// State of a single grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Reached logical cell, or a wall slot broken between two reached cells.
    Open = 0,
    Wall = 1,
    /// Logical cell the walk has not reached yet.
    Unvisited = 2,
}

impl Cell {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn is_unvisited(self) -> bool {
        matches!(self, Self::Unvisited)
    }

    /// Two-character console glyph, unvisited cells draw as walls.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Open => "  ",
            Self::Wall | Self::Unvisited => "||",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_numeric_cell_states() {
        assert_eq!(Cell::Open.code(), 0);
        assert_eq!(Cell::Wall.code(), 1);
        assert_eq!(Cell::Unvisited.code(), 2);
    }

    #[test]
    fn unvisited_cells_draw_like_walls() {
        assert_eq!(Cell::Unvisited.glyph(), Cell::Wall.glyph());
        assert_ne!(Cell::Open.glyph(), Cell::Wall.glyph());
        assert_eq!(Cell::Open.glyph().len(), 2);
    }
}
