//! Errors raised by the board state machine.

use super::{InvariantViolation, Position};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is not in 0..=8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The game has not finished, so there is no winner to read.
    #[display("Game is not over yet")]
    InProgress,
}

impl MoveError {
    /// True for errors a caller recovers from by choosing another cell.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::OutOfBounds(_) | MoveError::Occupied(_))
    }
}

/// A decoded board whose stored fields contradict its grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_new::new, derive_more::Error)]
pub struct InvalidBoard {
    /// Every invariant the decoded board broke.
    violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Inconsistent board:")?;
        for violation in &self.violations {
            write!(f, " {};", violation)?;
        }
        Ok(())
    }
}
