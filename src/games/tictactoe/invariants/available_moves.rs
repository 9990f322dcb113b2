//! Available moves invariant.

use super::super::{Board, Square};
use super::Invariant;

/// Invariant: the legal moves are exactly the empty squares.
pub struct AvailableMovesInvariant;

impl Invariant<Board> for AvailableMovesInvariant {
    fn holds(board: &Board) -> bool {
        let empty = board
            .squares()
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| i);
        board.legal_moves().iter().copied().eq(empty)
    }

    fn description() -> &'static str {
        "Available moves are the complement of occupied squares"
    }
}
