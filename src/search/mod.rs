//! Move selection for tic-tac-toe.
//!
//! Every strategy looks at a board, picks one legal cell and, through
//! [`Strategy::play`], applies exactly that one move to the board it was
//! given. Tree searches explore on clones, so the real board is touched only
//! by the final move. Ties between equally scored moves go to the lowest
//! cell index.

mod algorithms;
mod alpha_beta;
mod depth;
mod error;
mod evaluator;
mod minimax;
mod random;

pub use algorithms::{
    Algorithm, play_alpha_beta, play_alpha_beta_advanced, play_minimax, play_random,
};
pub use alpha_beta::AlphaBeta;
pub use depth::DepthLimit;
pub use error::SearchError;
pub use evaluator::{DepthAwareEvaluator, Evaluator, StaticEvaluator, WIN_SCORE};
pub use minimax::Minimax;
pub use random::RandomStrategy;

use crate::games::tictactoe::Board;
use derive_getters::Getters;
use derive_new::new;
use tracing::debug;

/// The move a strategy settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct SearchOutcome {
    /// Chosen cell (0-8).
    #[getter(copy)]
    index: usize,
    /// Root score from the mover's point of view; 0 for random play.
    #[getter(copy)]
    score: i32,
    /// Positions visited while choosing, root included.
    #[getter(copy)]
    nodes: u64,
}

/// A way of choosing moves.
pub trait Strategy {
    /// Chooses a move for the player to move without touching `board`.
    ///
    /// # Errors
    ///
    /// [`SearchError::GameOver`] if the game has already finished.
    fn select_move(&mut self, board: &Board) -> Result<SearchOutcome, SearchError>;

    /// Chooses a move and applies it to `board`.
    ///
    /// # Errors
    ///
    /// Propagates [`Strategy::select_move`] errors, and [`SearchError::Move`]
    /// if the board refuses the chosen cell.
    fn play(&mut self, board: &mut Board) -> Result<SearchOutcome, SearchError> {
        let outcome = self.select_move(board)?;
        board.play(outcome.index())?;
        debug!(index = outcome.index(), score = outcome.score(), "Strategy played move");
        Ok(outcome)
    }
}

/// Expands the root in ascending index order and keeps the strictly best
/// child, so the first of several equal scores wins.
///
/// `score_child` receives the child board and the best score found so far
/// (`i32::MIN` before the first child), which alpha-beta uses as its alpha.
pub(crate) fn best_root_move(
    board: &Board,
    nodes: &mut u64,
    mut score_child: impl FnMut(&Board, i32, &mut u64) -> i32,
) -> Result<(usize, i32), SearchError> {
    if board.is_over() {
        return Err(SearchError::GameOver);
    }
    *nodes += 1;

    let mut best: Option<(usize, i32)> = None;
    for &index in board.legal_moves() {
        let mut child = board.clone();
        child.play(index)?;

        let alpha = best.map_or(i32::MIN, |(_, score)| score);
        let score = score_child(&child, alpha, nodes);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.ok_or(SearchError::NoLegalMoves)
}
