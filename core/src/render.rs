use crate::*;

/// Consumer of grid snapshots, called once after every move of a generator.
///
/// Sinks only get a shared borrow: they can draw or record the grid but never change it.
pub trait RenderSink {
    type Error;

    fn render(&mut self, grid: &Grid) -> core::result::Result<(), Self::Error>;
}

impl<F> RenderSink for F
where
    F: FnMut(&Grid),
{
    type Error = MazeError;

    fn render(&mut self, grid: &Grid) -> Result<()> {
        self(grid);
        Ok(())
    }
}
