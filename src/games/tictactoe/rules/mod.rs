//! Game rules for tic-tac-toe.
//!
//! Pure functions over a grid of squares. The board keeps its outcome
//! incrementally; these functions let the same outcome be re-derived from
//! the raw grid.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, completed_line_through, lines_through};
