//! Move count invariant.

use super::super::{Board, Square};
use super::Invariant;

/// Invariant: the move count equals the number of occupied squares.
pub struct MoveCountInvariant;

impl Invariant<Board> for MoveCountInvariant {
    fn holds(board: &Board) -> bool {
        let occupied = board
            .squares()
            .iter()
            .filter(|&&sq| sq != Square::Empty)
            .count();
        occupied == board.move_count()
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied squares"
    }
}
