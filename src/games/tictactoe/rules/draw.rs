//! Draw detection logic for tic-tac-toe.

use super::super::Square;
use super::super::position::CELL_COUNT;
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(squares: &[Square; CELL_COUNT]) -> bool {
    squares.iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line.
pub fn is_draw(squares: &[Square; CELL_COUNT]) -> bool {
    is_full(squares) && check_winner(squares).is_none()
}
