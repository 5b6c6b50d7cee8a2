//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::Win;
use crate::types::{Board, Square};

/// Number of moves that fill the board.
pub const BOARD_SIZE: usize = 9;

/// Checks if the board is full (all squares occupied).
///
/// For callers holding only a [`Board`]. Status derivation goes through
/// [`is_tie`], which counts steps instead.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A tie is the ninth step with nobody holding a line.
///
/// The winner is checked first, so a full board with a line is a win.
pub fn is_tie(step: usize, winner: Option<&Win>) -> bool {
    winner.is_none() && step == BOARD_SIZE
}
