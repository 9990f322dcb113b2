//! Exhaustive minimax search.

use super::{DepthLimit, Evaluator, SearchError, SearchOutcome, StaticEvaluator, Strategy, best_root_move};
use crate::games::tictactoe::{Board, Player};
use tracing::{debug, instrument, warn};

/// Plain minimax without pruning.
///
/// The player to move at the root is the maximizer. Every legal move is
/// expanded in ascending index order down to a finished game or the depth
/// limit, where the evaluator scores the position.
#[derive(Debug, Clone, Default)]
pub struct Minimax<E = StaticEvaluator> {
    evaluator: E,
    depth: DepthLimit,
}

impl<E: Evaluator> Minimax<E> {
    /// Creates a minimax search. The root is always expanded, so a limit of
    /// zero behaves like a limit of one.
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

    fn value(&self, board: &Board, maximizer: Player, depth: DepthLimit, ply: u32, nodes: &mut u64) -> i32 {
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

            let score = self.value(&child, maximizer, depth.descend(), ply + 1, nodes);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }
}

impl<E: Evaluator> Strategy for Minimax<E> {
    #[instrument(skip(self, board), fields(turn = %board.turn(), depth = %self.depth))]
    fn select_move(&mut self, board: &Board) -> Result<SearchOutcome, SearchError> {
        let maximizer = board.turn();
        let child_depth = self.depth.descend();
        let mut nodes = 0;

        let (index, score) = best_root_move(board, &mut nodes, |child, _best, nodes| {
            self.value(child, maximizer, child_depth, 1, nodes)
        })?;

        debug!(index, score, nodes, "Minimax selected move");
        Ok(SearchOutcome::new(index, score, nodes))
    }
}
