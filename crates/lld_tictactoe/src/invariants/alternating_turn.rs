//! Alternating turn invariant: marks alternate, starting with player1.

use super::Invariant;
use crate::Game;

/// Invariant: players alternate turns.
///
/// History starts with the first player's mark and never repeats a mark
/// twice in a row. While the game runs, the active player holds the mark
/// that follows the last move; once it has ended, the active player made
/// the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let first = game.player1().mark();
        let active = game.active_player().mark();

        if history.iter().enumerate().any(|(i, mov)| {
            let expected = if i % 2 == 0 { first } else { first.opponent() };
            mov.mark != expected
        }) {
            return false;
        }

        match history.last() {
            None => active == first,
            Some(last) if game.is_running() => active == last.mark.opponent(),
            Some(last) => active == last.mark,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the first player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Coord, GameSetup, Mark, Move, Player};

    fn setup() -> GameSetup {
        GameSetup::new(
            Board::default(),
            Player::new("1", "a", Mark::O),
            Player::new("2", "b", Mark::X),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&setup().start_game()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(0, 2),
            Coord::new(2, 0),
            Coord::new(2, 2),
        ];
        let game = Game::replay(setup(), &coords).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.active_player().mark(), Mark::X);
    }

    #[test]
    fn test_finished_game_holds() {
        // O takes the left column
        let coords = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(2, 0),
        ];
        let game = Game::replay(setup(), &coords).unwrap();
        assert!(!game.is_running());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut game = setup().start_game();
        game.play_move(0, 0).unwrap();
        game.history.push(Move::new(Mark::O, Coord::new(2, 2)));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
