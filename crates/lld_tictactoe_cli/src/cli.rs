//! Command-line interface for the scripted game runner.

use clap::Parser;
use lld_tictactoe::Coord;
use std::path::PathBuf;

/// Plays a scripted tic-tac-toe game and reports the result
#[derive(Parser, Debug)]
#[command(name = "lld_tictactoe")]
#[command(about = "Plays a scripted tic-tac-toe game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (overrides the configuration)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Print the final game as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Moves as `row,col` pairs, played alternately from the first player
    pub moves: Vec<Coord>,
}
