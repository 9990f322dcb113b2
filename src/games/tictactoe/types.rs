//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol used when rendering the board: "X", "O" or "-".
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "-",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

impl From<Option<Player>> for Square {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Square::Empty, Square::Occupied)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_square_symbols() {
        assert_eq!(Square::Empty.symbol(), "-");
        assert_eq!(Square::from(Player::X).symbol(), "X");
        assert_eq!(Square::from(Player::O).symbol(), "O");
    }

    #[test]
    fn test_square_from_option() {
        assert_eq!(Square::from(None), Square::Empty);
        assert_eq!(Square::from(Some(Player::O)), Square::Occupied(Player::O));
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!(Player::from_str("x"), Ok(Player::X));
        assert_eq!(Player::from_str("O"), Ok(Player::O));
        assert!(Player::from_str("z").is_err());
    }
}
