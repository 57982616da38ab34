//! Two-phase game engine: setup, then play.
//!
//! [`GameSetup`] validates the board and the two players. Starting it yields
//! a [`Game`] in [`GameStatus::Running`], which accepts moves for the active
//! player until a line is completed or the board fills.

use crate::action::{Move, Transition};
use crate::contracts::{Contract, MoveContract};
use crate::error::{MoveError, SetupError};
use crate::{Board, Coord, GameStatus, Mark, Outcome, Player};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// A validated pairing of board and players, ready to start.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    players: [Player; 2],
}

impl GameSetup {
    /// Pairs a board with two players. `player1` moves first.
    ///
    /// # Errors
    ///
    /// - [`SetupError::BoardNotEmpty`] if the board already holds marks.
    /// - [`SetupError::DuplicateMark`] if both players hold the same mark.
    /// - [`SetupError::DuplicatePlayerId`] if both players share an id.
    #[instrument(skip(board), fields(size = board.size(), player1 = %player1, player2 = %player2))]
    pub fn new(board: Board, player1: Player, player2: Player) -> Result<Self, SetupError> {
        if board.occupied() > 0 {
            warn!("Board is not empty");
            return Err(SetupError::BoardNotEmpty);
        }
        if player1.mark() == player2.mark() {
            warn!(mark = %player1.mark(), "Players share a mark");
            return Err(SetupError::DuplicateMark(player1.mark()));
        }
        if player1.id() == player2.id() {
            warn!(id = player1.id(), "Players share an id");
            return Err(SetupError::DuplicatePlayerId(player1.id().to_string()));
        }
        Ok(Self {
            board,
            players: [player1, player2],
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Starts the game (consumes setup). The first player is active.
    #[instrument(skip(self))]
    pub fn start_game(self) -> Game {
        info!(
            first = %self.players[0],
            second = %self.players[1],
            size = self.board.size(),
            "Game started"
        );
        Game {
            board: self.board,
            players: self.players,
            active: 0,
            status: GameStatus::Running,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Phase
// ─────────────────────────────────────────────────────────────

/// A started game.
///
/// Invariants:
/// - status only moves from `Running` to `Ended`
/// - the active player alternates after every accepted, non-terminal move
/// - a rejected move leaves the game exactly as it was
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    players: [Player; 2],
    active: usize,
    status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Attempts a move for the active player at `(row, col)`.
    ///
    /// On success the mover's line is checked first, then a full board,
    /// and otherwise the turn passes to the other player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended.
    /// - [`MoveError::InvalidPosition`] for a coordinate off the board.
    /// - [`MoveError::CellOccupied`] for a cell that already holds a mark.
    ///
    /// In every case the game is unchanged and the same player stays active.
    #[instrument(skip(self), fields(player = %self.players[self.active]))]
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<Transition, MoveError> {
        let coord = Coord::new(row, col);

        if let Err(err) = MoveContract::pre(self, &coord) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.active_player().mark();
        self.board.place_symbol(row, col, mark)?;
        self.history.push(Move::new(mark, coord));
        debug!(%coord, %mark, "Mark placed");

        let transition = self.evaluate_game_status(mark);

        // Postcondition: verify invariants in debug builds
        #[cfg(debug_assertions)]
        {
            if let Err(err) = MoveContract::post(&before, self) {
                warn!(%err, "Postcondition failed, rolling back");
                *self = before;
                return Err(err);
            }
        }

        Ok(transition)
    }

    /// Decides what an accepted move by `mark` means for the game.
    fn evaluate_game_status(&mut self, mark: Mark) -> Transition {
        if self.board.has_winning_line(mark) {
            self.status = GameStatus::Ended(Outcome::Winner(mark));
            info!(winner = %self.players[self.active], "Game won");
            Transition::Won(mark)
        } else if self.board.is_full() {
            self.status = GameStatus::Ended(Outcome::Draw);
            info!("Game drawn");
            Transition::Draw
        } else {
            self.switch_turn();
            Transition::Continue {
                next: self.active_player().mark(),
            }
        }
    }

    fn switch_turn(&mut self) {
        self.active = 1 - self.active;
        debug!(active = %self.players[self.active], "Turn passed");
    }

    /// Starts `setup` and plays `coords` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move, including a move played after the
    /// game has ended ([`MoveError::GameOver`]).
    #[instrument(skip(setup))]
    pub fn replay(setup: GameSetup, coords: &[Coord]) -> Result<Game, MoveError> {
        let mut game = setup.start_game();
        for coord in coords {
            game.play_move(coord.row, coord.col)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player who moves first.
    pub fn player1(&self) -> &Player {
        &self.players[0]
    }

    /// The player who moves second.
    pub fn player2(&self) -> &Player {
        &self.players[1]
    }

    /// The player whose move is currently accepted.
    ///
    /// After the game ends this is the player who made the last move.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.status.outcome()
    }

    /// The winning player, if the game ended in a win.
    pub fn winner(&self) -> Option<&Player> {
        let mark = self.outcome()?.winner()?;
        self.players.iter().find(|p| p.mark() == mark)
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty cells the active player may choose from; none once ended.
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.is_running() {
            self.board.empty_cells()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> GameSetup {
        GameSetup::new(
            Board::default(),
            Player::new("1", "hemant", Mark::X),
            Player::new("2", "vasant", Mark::O),
        )
        .unwrap()
    }

    #[test]
    fn test_start_game_running_with_player1() {
        let game = setup().start_game();
        assert!(game.is_running());
        assert_eq!(game.active_player().id(), "1");
        assert!(game.history().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_duplicate_mark_rejected() {
        let result = GameSetup::new(
            Board::default(),
            Player::new("1", "a", Mark::X),
            Player::new("2", "b", Mark::X),
        );
        assert_eq!(result.unwrap_err(), SetupError::DuplicateMark(Mark::X));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = GameSetup::new(
            Board::default(),
            Player::new("7", "a", Mark::X),
            Player::new("7", "b", Mark::O),
        );
        assert_eq!(
            result.unwrap_err(),
            SetupError::DuplicatePlayerId("7".to_string())
        );
    }

    #[test]
    fn test_non_empty_board_rejected() {
        let mut board = Board::default();
        board.place_symbol(0, 0, Mark::X).unwrap();
        let result = GameSetup::new(
            board,
            Player::new("1", "a", Mark::X),
            Player::new("2", "b", Mark::O),
        );
        assert_eq!(result.unwrap_err(), SetupError::BoardNotEmpty);
    }

    #[test]
    fn test_player_two_may_hold_x() {
        let setup = GameSetup::new(
            Board::default(),
            Player::new("1", "a", Mark::O),
            Player::new("2", "b", Mark::X),
        )
        .unwrap();
        let mut game = setup.start_game();
        assert_eq!(game.play_move(0, 0), Ok(Transition::Continue { next: Mark::X }));
        assert_eq!(game.board().get(0, 0), Some(crate::Cell::Occupied(Mark::O)));
    }

    #[test]
    fn test_corrupted_state_rolls_back() {
        let mut game = setup().start_game();
        game.play_move(1, 1).unwrap();
        // An extra mark with no history entry breaks the postcondition
        game.board.force(0, 0, crate::Cell::Occupied(Mark::X));
        let snapshot = game.clone();

        let result = game.play_move(2, 2);
        if cfg!(debug_assertions) {
            assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
            assert_eq!(game.board(), snapshot.board());
            assert_eq!(game.history(), snapshot.history());
            assert_eq!(game.active_player(), snapshot.active_player());
        }
    }

    #[test]
    fn test_winner_resolves_player() {
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
            Coord::new(2, 2),
            Coord::new(0, 2),
        ];
        let game = Game::replay(setup(), &coords).unwrap();
        assert_eq!(game.winner().map(Player::name), Some("hemant"));
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_replay_stops_after_end() {
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(0, 2),
            Coord::new(2, 2),
        ];
        assert_eq!(Game::replay(setup(), &coords).unwrap_err(), MoveError::GameOver);
    }
}
