//! Search errors.

use crate::games::tictactoe::MoveError;

/// Error returned when a strategy cannot choose or apply a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// The game has already finished.
    #[display("Cannot search a finished game")]
    GameOver,

    /// The board offered no legal moves.
    #[display("No legal moves available")]
    NoLegalMoves,

    /// Applying the chosen move to the board failed.
    #[display("Failed to apply chosen move: {}", _0)]
    #[from]
    Move(MoveError),
}
