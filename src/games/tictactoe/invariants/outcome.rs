//! Outcome invariant: the stored result agrees with a full scan of the grid.

use super::super::rules::{check_winner, is_full};
use super::super::{Board, GameStatus};
use super::Invariant;

/// Invariant: the incrementally tracked status matches the grid.
///
/// A finished game has exactly one of: a winning line for the stored
/// winner, or a full board with no winning line. An unfinished game has
/// neither. Only one player can own a line, since play stops at the first.
pub struct OutcomeInvariant;

impl Invariant<Board> for OutcomeInvariant {
    fn holds(board: &Board) -> bool {
        let squares = board.squares();
        let derived = match check_winner(squares) {
            Some(player) => GameStatus::Won(player),
            None if is_full(squares) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        derived == board.status() && board.is_over() == derived.is_over()
    }

    fn description() -> &'static str {
        "Stored outcome matches the outcome derived from the grid"
    }
}
