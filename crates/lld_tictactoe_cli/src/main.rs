//! Tic-tac-toe runner
//!
//! Builds two players and a board from configuration, starts a game and
//! plays the moves given on the command line.

#![warn(missing_docs)]

mod cli;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use lld_tictactoe::{Game, MoveError, Transition};
use report::GameSummary;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_board_size(size);
    }

    let mut game = config.build()?.start_game();
    println!("{}, please make your move", game.active_player());

    play_script(&mut game, &cli);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&GameSummary::from(&game))?);
    } else {
        println!("{}", game.board());
        println!("{}", report::verdict(&game));
    }

    Ok(())
}

/// Plays every scripted move, reporting each rejected one.
#[instrument(skip_all, fields(moves = cli.moves.len()))]
fn play_script(game: &mut Game, cli: &Cli) {
    for coord in &cli.moves {
        let mover = game.active_player().clone();
        match game.play_move(coord.row, coord.col) {
            Ok(Transition::Continue { .. }) => {}
            Ok(Transition::Won(_)) => info!(winner = %mover, "Winning move"),
            Ok(Transition::Draw) => info!("Board filled"),
            Err(MoveError::GameOver) => {
                warn!(%coord, "Move after game end");
                println!("Game already ended");
            }
            Err(err) => {
                warn!(%coord, %err, "Scripted move rejected");
                println!("{}, try again", err);
            }
        }
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lld_tictactoe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
