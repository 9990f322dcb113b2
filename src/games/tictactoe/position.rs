//! Named cells of the tic-tac-toe grid.
//!
//! Cells are numbered row-major, `index = row * 3 + column`, so index 0 is
//! the top-left corner and index 8 the bottom-right one. Console input and
//! click mapping both land in this index space.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width (and height) of the grid.
pub const BOARD_WIDTH: usize = 3;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A position on the tic-tac-toe board (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions, in index order.
    pub const ALL: [Position; CELL_COUNT] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, column: usize) -> Option<Self> {
        if row >= BOARD_WIDTH || column >= BOARD_WIDTH {
            return None;
        }
        Self::from_index(row * BOARD_WIDTH + column)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / BOARD_WIDTH
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.to_index() % BOARD_WIDTH
    }

    /// Parse from a number (0-8) or a label.
    ///
    /// Labels match case-insensitively and ignore dashes, so "top left",
    /// "Top-left" and "topleft" all resolve to [`Position::TopLeft`].
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
