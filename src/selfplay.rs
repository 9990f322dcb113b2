//! Strategy-versus-strategy games.

use crate::games::tictactoe::{Board, GameStatus, Player};
use crate::search::{SearchError, Strategy};
use tracing::{debug, instrument};

/// Wins and draws over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Number of games recorded.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game from `board` until it ends, X moving with `x` and O with `o`.
///
/// # Errors
///
/// Propagates the first strategy error.
pub fn play_out<'a>(
    board: &mut Board,
    x: &'a mut dyn Strategy,
    o: &'a mut dyn Strategy,
) -> Result<GameStatus, SearchError> {
    while !board.is_over() {
        let strategy = match board.turn() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        strategy.play(board)?;
    }
    Ok(board.status())
}

/// Plays `games` games from the blank board and tallies the results.
///
/// # Errors
///
/// Propagates the first strategy error.
#[instrument(skip(x, o))]
pub fn run_series(games: usize, x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<Tally, SearchError> {
    let mut tally = Tally::default();
    let mut board = Board::new();
    for game in 0..games {
        board.reset();
        let status = play_out(&mut board, x, o)?;
        debug!(game, ?status, "Game finished");
        tally.record(status);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{AlphaBeta, RandomStrategy};

    #[test]
    fn test_perfect_players_draw() {
        let mut x = AlphaBeta::advanced(None);
        let mut o = AlphaBeta::advanced(None);
        let tally = run_series(2, &mut x, &mut o).unwrap();
        assert_eq!(tally.draws, 2);
    }

    #[test]
    fn test_random_series_counts_every_game() {
        let mut x = RandomStrategy::with_seed(11);
        let mut o = RandomStrategy::with_seed(12);
        let tally = run_series(25, &mut x, &mut o).unwrap();
        assert_eq!(tally.games(), 25);
    }

    #[test]
    fn test_play_out_alternates_mixed_strategies() {
        // X: 0, 4   O: 1   O to move; X has a forced win from here.
        let mut board = Board::from_moves(&[0, 1, 4]).unwrap();
        let mut x = AlphaBeta::advanced(None);
        let mut o = RandomStrategy::with_seed(4);
        let status = play_out(&mut board, &mut x, &mut o).unwrap();
        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(board.is_over());
        assert_eq!(board.check_invariants(), Ok(()));
    }
}
