use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use mazewalk_core::{Cell, Grid, RenderSink};

const fn glyph_color(cell: Cell) -> Color {
    match cell {
        Cell::Open => Color::White,
        Cell::Wall | Cell::Unvisited => Color::Yellow,
    }
}

/// Draws each grid snapshot over the previous one, then waits out the frame delay.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    delay: Duration,
    color: bool,
    cursor_hidden: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, delay: Duration, color: bool) -> Self {
        Self {
            out,
            delay,
            color,
            cursor_hidden: false,
        }
    }

    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, Hide)?;
            self.cursor_hidden = true;
        }
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;

        for row in grid.rows() {
            let mut current = None;
            for &cell in row.iter() {
                let color = glyph_color(cell);
                if self.color && current != Some(color) {
                    queue!(self.out, SetForegroundColor(color))?;
                    current = Some(color);
                }
                queue!(self.out, Print(cell.glyph()))?;
            }
            if self.color {
                queue!(self.out, ResetColor)?;
            }
            queue!(self.out, Print("\n"))?;
        }

        self.out.flush()
    }

    /// Shows the terminal cursor again if a frame hid it.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            execute!(self.out, Show)?;
            self.cursor_hidden = false;
        }
        Ok(())
    }
}

impl<W: Write> Drop for ConsoleRenderer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.finish() {
            log::warn!("Could not restore terminal cursor: {err}");
        }
    }
}

impl<W: Write> RenderSink for ConsoleRenderer<W> {
    type Error = anyhow::Error;

    fn render(&mut self, grid: &Grid) -> anyhow::Result<()> {
        self.draw(grid).context("Could not draw maze")?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::HuntAndKill;

    fn renderer(out: &mut Vec<u8>, color: bool) -> ConsoleRenderer<&mut Vec<u8>> {
        ConsoleRenderer::new(out, Duration::ZERO, color)
    }

    fn text(out: &[u8]) -> &str {
        std::str::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_frame_matches_grid_text() {
        let grid = Grid::with_size(2, 3).unwrap();
        let mut out = Vec::new();

        renderer(&mut out, false).draw(&grid).unwrap();
        let text = text(&out);

        let frame_end = text.rfind('\n').unwrap() + 1;
        assert!(text[..frame_end].ends_with(&grid.to_string()));
    }

    #[test]
    fn colored_frame_keeps_glyphs() {
        let grid = Grid::with_size(1, 1).unwrap();
        let mut plain = Vec::new();
        let mut colored = Vec::new();

        renderer(&mut plain, false).draw(&grid).unwrap();
        renderer(&mut colored, true).draw(&grid).unwrap();
        let (plain, colored) = (text(&plain), text(&colored));

        assert!(colored.len() > plain.len());
        assert_eq!(colored.matches("||").count(), plain.matches("||").count());
    }

    #[test]
    fn sink_draws_a_frame_per_move() {
        let grid = Grid::with_size(2, 2).unwrap();
        let mut generator = HuntAndKill::from_seed(grid, 8);
        let mut out = Vec::new();

        let stats = generator.generate(&mut renderer(&mut out, false)).unwrap();
        let text = text(&out);

        assert_eq!(stats.moves, 3);
        assert_eq!(text.matches("\x1b[1;1H").count(), 3);
        let frame_end = text.rfind('\n').unwrap() + 1;
        assert!(text[..frame_end].ends_with(&generator.grid().to_string()));
    }

    #[test]
    fn finish_shows_the_cursor_once() {
        let mut out = Vec::new();
        let mut renderer = renderer(&mut out, false);

        renderer.draw(&Grid::with_size(1, 1).unwrap()).unwrap();
        renderer.finish().unwrap();
        drop(renderer);

        let text = text(&out);
        assert!(text.starts_with("\x1b[?25l"));
        assert_eq!(text.matches("\x1b[?25h").count(), 1);
    }

    /// Accepts every byte but refuses to flush, like a closed terminal.
    struct UnflushableWriter {
        written: Vec<u8>,
    }

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("terminal closed"))
        }
    }

    #[test]
    fn cursor_comes_back_when_drawing_fails() {
        let mut writer = UnflushableWriter {
            written: Vec::new(),
        };
        let mut generator = HuntAndKill::from_seed(Grid::with_size(2, 2).unwrap(), 8);

        {
            let mut renderer = ConsoleRenderer::new(&mut writer, Duration::ZERO, true);
            let err = generator.generate(&mut renderer).unwrap_err();
            assert!(err.to_string().contains("Could not draw maze"));
        }

        assert_eq!(generator.stats().moves, 1);
        assert!(text(&writer.written).ends_with("\x1b[?25h"));
    }
}
