//! Property tests for board placement and line detection.

use lld_tictactoe::{Board, Coord, GameSetup, Mark, MoveError, PlaceError, Player};
use proptest::prelude::*;

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

proptest! {
    #[test]
    fn full_iff_every_cell_marked(size in 1usize..7, fill in 0usize..49, m in mark()) {
        let mut board = Board::new(size).unwrap();
        let target = fill % (size * size + 1);
        for idx in 0..target {
            board.place_symbol(idx / size, idx % size, m).unwrap();
        }
        prop_assert_eq!(board.occupied(), target);
        prop_assert_eq!(board.is_full(), target == size * size);
    }

    #[test]
    fn full_row_column_or_diagonal_wins(size in 1usize..7, line in 0usize..7, kind in 0u8..4, m in mark()) {
        let line = line % size;
        let mut board = Board::new(size).unwrap();
        for i in 0..size {
            let (row, col) = match kind {
                0 => (line, i),
                1 => (i, line),
                2 => (i, i),
                _ => (i, size - 1 - i),
            };
            board.place_symbol(row, col, m).unwrap();
        }
        prop_assert!(board.has_winning_line(m));
        prop_assert!(!board.has_winning_line(m.opponent()));
    }

    #[test]
    fn line_missing_one_cell_does_not_win(size in 2usize..7, line in 0usize..7, gap in 0usize..7, kind in 0u8..4, m in mark()) {
        let line = line % size;
        let gap = gap % size;
        let mut board = Board::new(size).unwrap();
        for i in (0..size).filter(|i| *i != gap) {
            let (row, col) = match kind {
                0 => (line, i),
                1 => (i, line),
                2 => (i, i),
                _ => (i, size - 1 - i),
            };
            board.place_symbol(row, col, m).unwrap();
        }
        prop_assert!(!board.has_winning_line(m));
    }

    #[test]
    fn occupied_placement_never_mutates(size in 1usize..6, row in 0usize..6, col in 0usize..6, first in mark(), second in mark()) {
        let (row, col) = (row % size, col % size);
        let mut board = Board::new(size).unwrap();
        board.place_symbol(row, col, first).unwrap();
        let before = board.clone();

        prop_assert_eq!(board.place_symbol(row, col, second), Err(PlaceError::Occupied { row, col }));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn off_board_placement_never_mutates(size in 1usize..6, row in 0usize..12, col in 0usize..12, m in mark()) {
        prop_assume!(row >= size || col >= size);
        let mut board = Board::new(size).unwrap();
        board.place_symbol(0, 0, m.opponent()).unwrap();
        let before = board.clone();

        prop_assert_eq!(board.place_symbol(row, col, m), Err(PlaceError::OutOfBounds { row, col, size }));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn turn_alternates_with_move_count(moves in 0usize..8) {
        // On a 9x9 board no line can complete within eight moves
        let setup = GameSetup::new(
            Board::new(9).unwrap(),
            Player::new("1", "a", Mark::X),
            Player::new("2", "b", Mark::O),
        )
        .unwrap();
        let coords: Vec<Coord> = (0..moves).map(|i| Coord::new(i, (i * 2) % 9)).collect();
        let game = lld_tictactoe::Game::replay(setup, &coords).unwrap();

        prop_assert!(game.is_running());
        let expected = if moves % 2 == 0 { "1" } else { "2" };
        prop_assert_eq!(game.active_player().id(), expected);
    }

    #[test]
    fn rejected_move_keeps_turn(row in 3usize..10, col in 0usize..10) {
        let mut game = GameSetup::new(
            Board::default(),
            Player::new("1", "a", Mark::X),
            Player::new("2", "b", Mark::O),
        )
        .unwrap()
        .start_game();
        game.play_move(1, 1).unwrap();

        let result = game.play_move(row, col);
        let is_invalid_position = matches!(result, Err(MoveError::InvalidPosition { .. }));
        prop_assert!(is_invalid_position);
        prop_assert_eq!(game.active_player().id(), "2");
        prop_assert_eq!(game.history().len(), 1);
    }
}
