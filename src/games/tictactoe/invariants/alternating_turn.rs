//! Alternating turn invariant: X moves on even counts, O on odd ones.

use super::super::{Board, Player, Square};
use super::Invariant;

/// Invariant: the turn matches the move count and the marks on the grid.
///
/// X always opens, so X holds either as many marks as O or exactly one
/// more, and the player to move follows from the parity of the count.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let count = |player| {
            board
                .squares()
                .iter()
                .filter(|&&sq| sq == Square::Occupied(player))
                .count()
        };
        let (xs, os) = (count(Player::X), count(Player::O));

        let expected_turn = if board.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        (xs == os || xs == os + 1) && board.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(AlternatingTurnInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let board = Board::from_moves(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.turn(), Player::O);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut board = Board::from_moves(&[4]).unwrap();
        assert!(!board.apply_move(4));
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.turn(), Player::O);
    }
}
