//! CLI entry point for the maze generation tool

use clap::Parser;
use mazecarve::io::cli::{Cli, MazeProcessor};

fn main() -> mazecarve::Result<()> {
    let cli = Cli::parse();
    let mut processor = MazeProcessor::new(cli);
    processor.process()
}
