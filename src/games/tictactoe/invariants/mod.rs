//! First-class invariants for the tic-tac-toe board.
//!
//! The board updates its counters and outcome incrementally. Each invariant
//! here re-derives one of those facts from the raw grid and compares, so a
//! drift between the two shows up in tests instead of in play.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod available_moves;
pub mod move_count;
pub mod outcome;

pub use alternating_turn::AlternatingTurnInvariant;
pub use available_moves::AvailableMovesInvariant;
pub use move_count::MoveCountInvariant;
pub use outcome::OutcomeInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    MoveCountInvariant,
    AvailableMovesInvariant,
    AlternatingTurnInvariant,
    OutcomeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let board = Board::from_moves(&[0, 4, 2, 1, 7]).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MoveCountInvariant, AvailableMovesInvariant);
        let board = Board::from_moves(&[8, 0]).unwrap();
        assert!(TwoInvariants::check_all(&board).is_ok());
    }
}
