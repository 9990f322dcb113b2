//! Tic-tac-toe engine with tree-search move selection.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 state machine (move legality, turn alternation,
//!   win and draw detection)
//! - **Search**: strategies that pick a move for the player to move
//!   (uniform random, minimax, alpha-beta with two evaluators)
//! - **Config**: TOML engine settings for the console front end
//!
//! # Example
//!
//! ```
//! use tictactoe_search::{Board, GameStatus, play_alpha_beta_advanced};
//!
//! let mut board = Board::new();
//! while !board.is_over() {
//!     play_alpha_beta_advanced(&mut board, None).unwrap();
//! }
//! // Perfect play from both sides always draws.
//! assert_eq!(board.status(), GameStatus::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod search;
mod selfplay;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Board
pub use games::tictactoe::{
    BOARD_WIDTH, Board, CELL_COUNT, Cell, GameStatus, InvalidBoard, InvariantViolation, MoveError, Player,
    Position, Square, rules,
};

// Crate-level exports - Search
pub use search::{
    Algorithm, AlphaBeta, DepthAwareEvaluator, DepthLimit, Evaluator, Minimax, RandomStrategy, SearchError,
    SearchOutcome, StaticEvaluator, Strategy, WIN_SCORE, play_alpha_beta, play_alpha_beta_advanced, play_minimax,
    play_random,
};

// Crate-level exports - Self-play
pub use selfplay::{Tally, play_out, run_series};
