//! Final game reporting, as text or JSON.

use lld_tictactoe::{Game, GameStatus, Move, Outcome, Player};
use serde::Serialize;

/// Serializable snapshot of a game for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    board_size: usize,
    board: Vec<String>,
    players: Vec<Player>,
    active_player: String,
    status: GameStatus,
    history: Vec<Move>,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            board_size: game.board().size(),
            board: game
                .board()
                .to_string()
                .lines()
                .step_by(2)
                .map(|row| row.replace('|', ""))
                .collect(),
            players: game.players().to_vec(),
            active_player: game.active_player().id().to_string(),
            status: *game.status(),
            history: game.history().to_vec(),
        }
    }
}

/// Human-readable verdict for the current state of `game`.
pub fn verdict(game: &Game) -> String {
    match game.outcome() {
        None => format!("In progress, {} to move", game.active_player()),
        Some(Outcome::Draw) => "There is no winner, game draw".to_string(),
        Some(Outcome::Winner(_)) => match game.winner() {
            Some(player) => format!("Congratulations {}, you are the winner", player),
            None => "Game won".to_string(),
        },
    }
}
