//! Error types for board placement, moves and game setup.

use crate::types::Mark;

/// Reason a placement was refused by the board.
///
/// The board is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// Coordinate lies outside `[0, size)` on either axis.
    #[display("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for PlaceError {}

/// Error returned when a move is rejected.
///
/// All variants are recoverable: the game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is off the board.
    #[display("Invalid move: ({row}, {col}) is outside the {size}x{size} board")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The cell at the coordinate is already occupied.
    #[display("Invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already ended.
    #[display("Game already ended")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfBounds { row, col, size } => {
                MoveError::InvalidPosition { row, col, size }
            }
            PlaceError::Occupied { row, col } => MoveError::CellOccupied { row, col },
        }
    }
}

/// Malformed construction of a board or game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Board side length must be at least 1.
    #[display("Board size must be positive, got {}", _0)]
    InvalidBoardSize(usize),

    /// Board side length whose cell count cannot be represented or allocated.
    #[display("Board size {} is too large", _0)]
    BoardTooLarge(usize),

    /// Stored cells do not cover a `size`×`size` grid.
    #[display("Board of size {size} needs {size}x{size} cells, got {cells}")]
    CellCountMismatch {
        /// Declared side length.
        size: usize,
        /// Number of cells supplied.
        cells: usize,
    },

    /// Both players were given the same mark.
    #[display("Both players hold mark {}", _0)]
    DuplicateMark(Mark),

    /// Both players were given the same id.
    #[display("Both players have id '{}'", _0)]
    DuplicatePlayerId(String),

    /// A game must start on an empty board.
    #[display("Board already contains marks")]
    BoardNotEmpty,
}

impl std::error::Error for SetupError {}
