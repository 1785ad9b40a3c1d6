//! CLI for maze generation

use anyhow::Context;
use log::LevelFilter;
use prim_maze::{MazeGrid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use rand::{rngs::StdRng, SeedableRng};
use simple_logger::SimpleLogger;

/// Generate a fixed size maze and print it to stdout
fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("While initializing logging")?;

    let mut grid = MazeGrid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        .context("While creating the maze grid")?;
    let mut rng = StdRng::from_entropy();
    grid.generate_maze(&mut rng);

    println!("{grid}");
    Ok(())
}
