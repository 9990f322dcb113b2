//! Uniformly random move selection.

use super::{SearchError, SearchOutcome, Strategy};
use crate::games::tictactoe::Board;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
    seed: u64,
}

impl RandomStrategy {
    /// Seeds from the thread-local generator.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// Reproducible strategy for a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this strategy was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board), fields(turn = %board.turn()))]
    fn select_move(&mut self, board: &Board) -> Result<SearchOutcome, SearchError> {
        if board.is_over() {
            return Err(SearchError::GameOver);
        }
        let moves: Vec<usize> = board.legal_moves().iter().copied().collect();
        let index = *moves.choose(&mut self.rng).ok_or(SearchError::NoLegalMoves)?;

        debug!(index, choices = moves.len(), "Random move selected");
        Ok(SearchOutcome::new(index, 0, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomStrategy::with_seed(7);
        let mut b = RandomStrategy::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_only_legal_moves() {
        let board = Board::from_moves(&[0, 1, 2, 3, 5, 4, 7]).unwrap();
        let mut strategy = RandomStrategy::with_seed(1);
        for _ in 0..100 {
            let index = strategy.select_move(&board).unwrap().index();
            assert!(board.legal_moves().contains(&index));
        }
    }

    #[test]
    fn test_finished_game_errors() {
        let board = Board::from_moves(&[0, 3, 1, 4, 2]).unwrap();
        let mut strategy = RandomStrategy::with_seed(3);
        assert_eq!(strategy.select_move(&board), Err(SearchError::GameOver));
    }
}
