//! One-call entry points for each move-selection algorithm.

use super::{
    AlphaBeta, DepthAwareEvaluator, DepthLimit, Minimax, RandomStrategy, SearchError, SearchOutcome,
    StaticEvaluator, Strategy,
};
use crate::games::tictactoe::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The available move-selection algorithms.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    /// Uniformly random legal move.
    Random,
    /// Full minimax with win/loss/draw scoring.
    Minimax,
    /// Alpha-beta with win/loss/draw scoring.
    AlphaBeta,
    /// Alpha-beta preferring quick wins and slow losses.
    #[default]
    AlphaBetaAdvanced,
}

impl Algorithm {
    /// Builds the strategy for this algorithm. `depth` is ignored by
    /// [`Algorithm::Random`].
    pub fn strategy(self, depth: impl Into<DepthLimit>) -> Box<dyn Strategy> {
        let depth = depth.into();
        match self {
            Algorithm::Random => Box::new(RandomStrategy::new()),
            Algorithm::Minimax => Box::new(Minimax::new(StaticEvaluator, depth)),
            Algorithm::AlphaBeta => Box::new(AlphaBeta::new(StaticEvaluator, depth)),
            Algorithm::AlphaBetaAdvanced => Box::new(AlphaBeta::new(DepthAwareEvaluator, depth)),
        }
    }

    /// Selects and applies one move to `board`.
    ///
    /// # Errors
    ///
    /// [`SearchError::GameOver`] if the game has already finished.
    #[instrument(skip(self, board, depth), fields(algorithm = %self))]
    pub fn play(self, board: &mut Board, depth: impl Into<DepthLimit>) -> Result<SearchOutcome, SearchError> {
        self.strategy(depth).play(board)
    }
}

/// Plays a uniformly random legal move.
///
/// # Errors
///
/// [`SearchError::GameOver`] if the game has already finished.
pub fn play_random(board: &mut Board) -> Result<SearchOutcome, SearchError> {
    Algorithm::Random.play(board, DepthLimit::Unlimited)
}

/// Plays the minimax move; `None` searches to the end of the game.
///
/// # Errors
///
/// [`SearchError::GameOver`] if the game has already finished.
pub fn play_minimax(board: &mut Board, depth: Option<u32>) -> Result<SearchOutcome, SearchError> {
    Algorithm::Minimax.play(board, depth)
}

/// Plays the alpha-beta move; `None` searches to the end of the game.
///
/// # Errors
///
/// [`SearchError::GameOver`] if the game has already finished.
pub fn play_alpha_beta(board: &mut Board, depth: Option<u32>) -> Result<SearchOutcome, SearchError> {
    Algorithm::AlphaBeta.play(board, depth)
}

/// Plays the depth-aware alpha-beta move; `None` searches to the end of
/// the game.
///
/// # Errors
///
/// [`SearchError::GameOver`] if the game has already finished.
pub fn play_alpha_beta_advanced(board: &mut Board, depth: Option<u32>) -> Result<SearchOutcome, SearchError> {
    Algorithm::AlphaBetaAdvanced.play(board, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::AlphaBetaAdvanced.to_string(), "alpha-beta-advanced");
        assert_eq!(Algorithm::from_str("minimax"), Ok(Algorithm::Minimax));
        assert_eq!(Algorithm::default(), Algorithm::AlphaBetaAdvanced);
    }

    #[test]
    fn test_each_algorithm_plays_one_move() {
        for algorithm in <Algorithm as strum::IntoEnumIterator>::iter() {
            let mut board = Board::from_moves(&[4]).unwrap();
            let outcome = algorithm.play(&mut board, Some(2)).unwrap();
            assert_eq!(board.move_count(), 2, "{algorithm}");
            assert_ne!(outcome.index(), 4);
        }
    }

    #[test]
    fn test_play_functions_reject_finished_game() {
        let mut board = Board::from_moves(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(play_minimax(&mut board, None), Err(SearchError::GameOver));
        assert_eq!(play_random(&mut board), Err(SearchError::GameOver));
        assert_eq!(board.move_count(), 5);
    }
}
