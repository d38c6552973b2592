use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use mazewalk_core::{Grid, HuntAndKill, MazeConfig};
use web_time::Instant;

use render::ConsoleRenderer;

mod input;
mod render;

/// Animated hunt-and-kill maze generator for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Maze height in cells, asked for on standard input when omitted
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Maze width in cells, asked for on standard input when omitted
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Draw plain glyphs without terminal colors
    #[arg(long)]
    no_color: bool,

    /// Only draw the finished maze
    #[arg(long)]
    no_animate: bool,
}

fn read_config(args: &Args) -> Result<MazeConfig> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let height = match args.height {
        Some(height) => height,
        None => input::read_dimension(&mut input, &mut output, "height")?,
    };
    let width = match args.width {
        Some(width) => width,
        None => input::read_dimension(&mut input, &mut output, "width")?,
    };

    Ok(MazeConfig::new(height, width)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = read_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("size: {}x{}, seed: {}", config.height, config.width, seed);

    let mut generator = HuntAndKill::from_seed(Grid::new(config), seed);
    let delay = Duration::from_millis(args.delay_ms);
    let mut renderer = ConsoleRenderer::new(io::stdout().lock(), delay, !args.no_color);

    let started = Instant::now();
    let stats = if args.no_animate {
        generator.finish()?
    } else {
        generator.generate(&mut renderer)?
    };
    let elapsed = started.elapsed();

    if args.no_animate || stats.moves == 0 {
        renderer
            .draw(generator.grid())
            .context("Could not draw maze")?;
    }
    log::info!(
        "{} moves, {} hunts, {} cells scanned while hunting",
        stats.moves,
        stats.hunts,
        stats.hunt_scanned
    );

    renderer.finish().context("Could not restore terminal")?;
    drop(renderer);
    writeln!(
        io::stdout(),
        "Generated a {}x{} maze in {:.2?} ({} moves, {} hunts)",
        config.height, config.width, elapsed, stats.moves, stats.hunts
    )?;
    Ok(())
}
