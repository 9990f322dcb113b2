//! The tic-tac-toe board state machine.
//!
//! A [`Board`] owns its grid, whose turn it is, the move count, the
//! outcome and the set of still-available cells. The outcome is computed
//! when a move lands, by looking only at the lines through that cell, and
//! stored so queries are O(1). Every field is owned, so `clone()` yields a
//! fully independent board for search simulation.

use super::error::{InvalidBoard, MoveError};
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::position::{BOARD_WIDTH, CELL_COUNT, Position};
use super::rules;
use super::types::{GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// 3x3 tic-tac-toe board with turn and outcome tracking.
///
/// Decoding checks every board invariant, so a deserialized board whose
/// counters, available set or outcome disagree with its grid is rejected
/// with [`InvalidBoard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
    /// Player to move next.
    turn: Player,
    /// Winning player, `Empty` while in progress or after a draw.
    winner: Square,
    move_count: usize,
    game_over: bool,
    /// Indices of empty squares.
    available: BTreeSet<usize>,
}

impl Board {
    /// Creates a blank board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
            turn: Player::X,
            winner: Square::Empty,
            move_count: 0,
            game_over: false,
            available: (0..CELL_COUNT).collect(),
        }
    }

    /// Replays `moves` from a blank board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying.
    #[instrument]
    pub fn from_moves(moves: &[usize]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for &index in moves {
            board.play(index)?;
        }
        Ok(board)
    }

    /// Restores the blank starting state in place.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
        self.turn = Player::X;
        self.winner = Square::Empty;
        self.move_count = 0;
        self.game_over = false;
        self.available.clear();
        self.available.extend(0..CELL_COUNT);
        debug!("Board reset");
    }

    /// Places the current player's mark at `index`.
    ///
    /// On success the move count grows by one, the outcome is updated from
    /// the lines through the played cell and the turn passes to the
    /// opponent. On error the board is left untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already finished.
    /// - [`MoveError::OutOfBounds`] if `index` is not in 0..=8.
    /// - [`MoveError::Occupied`] if the square is taken.
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if self.squares[index] != Square::Empty {
            return Err(MoveError::Occupied(pos));
        }

        let mover = self.turn;
        self.squares[index] = Square::Occupied(mover);
        self.available.remove(&index);
        self.move_count += 1;

        if let Some(winner) = rules::completed_line_through(&self.squares, index) {
            self.winner = Square::Occupied(winner);
            self.game_over = true;
        } else if self.move_count == CELL_COUNT {
            self.winner = Square::Empty;
            self.game_over = true;
        }

        self.turn = mover.opponent();
        trace!(index, player = %mover, game_over = self.game_over, "Move applied");
        Ok(())
    }

    /// Places the current player's mark at `index`, reporting legality as a bool.
    ///
    /// Returns `false` (board unchanged) when the square is occupied or the
    /// index is out of range.
    ///
    /// # Panics
    ///
    /// Panics if the game is already over. Moving after the end is a
    /// caller bug, not a game event.
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.play(index) {
            Ok(()) => true,
            Err(MoveError::GameOver) => {
                panic!("Tic-tac-toe game is over; no moves can be played")
            }
            Err(err) => {
                debug!(%err, "Move rejected");
                false
            }
        }
    }

    /// Indices of the empty squares, in ascending order.
    pub fn legal_moves(&self) -> &BTreeSet<usize> {
        &self.available
    }

    /// True once somebody won or the board filled up.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The winner, or `Square::Empty` for a draw.
    ///
    /// # Errors
    ///
    /// [`MoveError::InProgress`] while the game is still running.
    pub fn try_winner(&self) -> Result<Square, MoveError> {
        if self.game_over {
            Ok(self.winner)
        } else {
            Err(MoveError::InProgress)
        }
    }

    /// The winner, or `Square::Empty` for a draw.
    ///
    /// # Panics
    ///
    /// Panics if the game is not over yet.
    pub fn winner(&self) -> Square {
        match self.try_winner() {
            Ok(winner) => winner,
            Err(_) => panic!("Tic-tac-toe game is not over yet"),
        }
    }

    /// Four-way game status.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Square::Occupied(player)) => GameStatus::Won(player),
            (true, Square::Empty) => GameStatus::Draw,
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn square(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Renders the grid as three lines of space-separated "X", "O" or "-".
    pub fn render(&self) -> String {
        self.squares
            .chunks(BOARD_WIDTH)
            .map(|row| row.iter().map(|sq| sq.symbol()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Checks the stored counters and outcome against the raw grid.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self)
    }
}

/// Unchecked wire form of [`Board`].
#[derive(Serialize, Deserialize)]
struct BoardRecord {
    squares: [Square; CELL_COUNT],
    turn: Player,
    winner: Square,
    move_count: usize,
    game_over: bool,
    available: BTreeSet<usize>,
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        Self {
            squares: board.squares,
            turn: board.turn,
            winner: board.winner,
            move_count: board.move_count,
            game_over: board.game_over,
            available: board.available,
        }
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = InvalidBoard;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let board = Self {
            squares: record.squares,
            turn: record.turn,
            winner: record.winner,
            move_count: record.move_count,
            game_over: record.game_over,
            available: record.available,
        };
        board.check_invariants().map_err(InvalidBoard::new)?;
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
