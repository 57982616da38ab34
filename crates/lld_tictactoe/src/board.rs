//! Square grid of cells with the single placement entry point.

use crate::error::{PlaceError, SetupError};
use crate::rules;
use crate::types::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of a standard board.
pub const DEFAULT_SIZE: usize = 3;

/// N×N tic-tac-toe board.
///
/// Cells are stored row-major. Once a cell is occupied it is never
/// overwritten; [`Board::place_symbol`] is the only way to change it.
///
/// Deserializing goes through the same size checks as [`Board::new`], and
/// also requires exactly `size * size` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = SetupError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = cell_count(repr.size)?;
        if repr.cells.len() != expected {
            return Err(SetupError::CellCountMismatch {
                size: repr.size,
                cells: repr.cells.len(),
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

/// Number of cells on a `size`×`size` board.
fn cell_count(size: usize) -> Result<usize, SetupError> {
    if size == 0 {
        return Err(SetupError::InvalidBoardSize(size));
    }
    size.checked_mul(size).ok_or(SetupError::BoardTooLarge(size))
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// - [`SetupError::InvalidBoardSize`] if `size` is zero.
    /// - [`SetupError::BoardTooLarge`] if `size * size` cells cannot be
    ///   counted in a `usize` or allocated.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SetupError> {
        let len = cell_count(size)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|err| {
            debug!(%err, "Cell allocation failed");
            SetupError::BoardTooLarge(size)
        })?;
        cells.resize(len, Cell::Empty);
        Ok(Self { size, cells })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Returns true if `(row, col)` lies on the board and holds no mark.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.is_valid_cell(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfBounds`] if the coordinate is off the board.
    /// - [`PlaceError::Occupied`] if the cell already holds a mark.
    ///
    /// The board is unchanged when an error is returned.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place_symbol(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_valid_cell(row, col) {
            debug!("Placement off the board");
            return Err(PlaceError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = row * self.size + col;
        if !self.cells[idx].is_empty() {
            debug!("Placement on occupied cell");
            return Err(PlaceError::Occupied { row, col });
        }
        self.cells[idx] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns true if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true if some row, column or diagonal is entirely `mark`.
    pub fn has_winning_line(&self, mark: Mark) -> bool {
        rules::has_winning_line(self, mark)
    }

    /// Returns the mark owning a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of cells holding any mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(idx, _)| Coord::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Overwrites a cell without any checks, for corrupting state in tests.
    #[cfg(test)]
    pub(crate) fn force(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                let sep = vec!["-"; self.size].join("+");
                writeln!(f)?;
                writeln!(f, "{}", sep)?;
            }
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
