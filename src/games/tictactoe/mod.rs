//! Tic-tac-toe board state machine.

mod board;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{InvalidBoard, MoveError};
pub use invariants::InvariantViolation;
pub use position::{BOARD_WIDTH, CELL_COUNT, Position};
pub use types::{GameStatus, Player, Square};

/// Alias for the value held by a cell.
pub type Cell = Square;
