//! Alpha-beta pruned minimax.

use super::{
    DepthAwareEvaluator, DepthLimit, Evaluator, SearchError, SearchOutcome, StaticEvaluator, Strategy,
    best_root_move,
};
use crate::games::tictactoe::{Board, Player};
use tracing::{debug, instrument, warn};

/// Minimax with alpha-beta pruning.
///
/// Returns the same move and root score as [`super::Minimax`] with the
/// same evaluator, while skipping siblings once `alpha >= beta`. With
/// [`StaticEvaluator`] this is the plain variant; with
/// [`DepthAwareEvaluator`] it is the advanced one that prefers quick wins.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta<E = StaticEvaluator> {
    evaluator: E,
    depth: DepthLimit,
}

impl AlphaBeta<StaticEvaluator> {
    /// Alpha-beta with win/loss/draw scoring.
    pub fn plain(depth: impl Into<DepthLimit>) -> Self {
        Self::new(StaticEvaluator, depth)
    }
}

impl AlphaBeta<DepthAwareEvaluator> {
    /// Alpha-beta with depth-aware scoring.
    pub fn advanced(depth: impl Into<DepthLimit>) -> Self {
        Self::new(DepthAwareEvaluator, depth)
    }
}

impl<E: Evaluator> AlphaBeta<E> {
    /// Creates an alpha-beta search. The root is always expanded, so a
    /// limit of zero behaves like a limit of one.
    pub fn new(evaluator: E, depth: impl Into<DepthLimit>) -> Self {
        Self {
            evaluator,
            depth: depth.into(),
        }
    }

    /// The depth budget.
    pub fn depth(&self) -> DepthLimit {
        self.depth
    }

    // Fail-soft: a result at or below alpha (or at or above beta) is a bound,
    // anything strictly inside the window is exact.
    fn value(
        &self,
        board: &Board,
        maximizer: Player,
        depth: DepthLimit,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if board.is_over() || depth.is_exhausted() {
            return self.evaluator.evaluate(board, maximizer, ply);
        }

        let maximizing = board.turn() == maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &index in board.legal_moves() {
            let mut child = board.clone();
            if let Err(err) = child.play(index) {
                warn!(index, %err, "Board refused a listed move, skipping it");
                continue;
            }

            let score = self.value(&child, maximizer, depth.descend(), ply + 1, alpha, beta, nodes);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

impl<E: Evaluator> Strategy for AlphaBeta<E> {
    #[instrument(skip(self, board), fields(turn = %board.turn(), depth = %self.depth))]
    fn select_move(&mut self, board: &Board) -> Result<SearchOutcome, SearchError> {
        let maximizer = board.turn();
        let child_depth = self.depth.descend();
        let mut nodes = 0;

        let (index, score) = best_root_move(board, &mut nodes, |child, alpha, nodes| {
            self.value(child, maximizer, child_depth, 1, alpha, i32::MAX, nodes)
        })?;

        debug!(index, score, nodes, "Alpha-beta selected move");
        Ok(SearchOutcome::new(index, score, nodes))
    }
}
