//! Win detection logic for tic-tac-toe.
//!
//! A line is a full row, a full column, the main diagonal or the
//! anti-diagonal. Line categories are checked independently and any single
//! match is a win.

use crate::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `mark` fills at least one line.
///
/// Rows, columns and both diagonals are scanned in place by index.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_winning_line(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    let owns = |row, col| board.get(row, col) == Some(Cell::Occupied(mark));

    (0..n).any(|r| (0..n).all(|c| owns(r, c)))
        || (0..n).any(|c| (0..n).all(|r| owns(r, c)))
        || (0..n).all(|i| owns(i, i))
        || (0..n).all(|i| owns(i, n - 1 - i))
}

/// Returns the mark that fills a line, if any.
///
/// Under normal play at most one mark can own a line; if both do, X is
/// reported.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|mark| has_winning_line(board, *mark))
}
