//! Win detection logic for tic-tac-toe.

use super::super::position::{BOARD_WIDTH, CELL_COUNT};
use super::super::{Player, Square};

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; BOARD_WIDTH];

/// Every winning line on the grid.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the lines passing through `index`: its row, its column, the main
/// diagonal when `x == y` and the anti-diagonal when `x + y == width - 1`.
pub fn lines_through(index: usize) -> impl Iterator<Item = Line> {
    let (x, y) = (index % BOARD_WIDTH, index / BOARD_WIDTH);
    let row = [y * BOARD_WIDTH, y * BOARD_WIDTH + 1, y * BOARD_WIDTH + 2];
    let column = [x, x + BOARD_WIDTH, x + 2 * BOARD_WIDTH];
    let main = (x == y).then_some(LINES[6]);
    let anti = (x + y == BOARD_WIDTH - 1).then_some(LINES[7]);

    [Some(row), Some(column), main, anti].into_iter().flatten()
}

fn line_owner(squares: &[Square; CELL_COUNT], [a, b, c]: Line) -> Option<Player> {
    let sq = squares[a];
    if sq == squares[b] && sq == squares[c] {
        sq.player()
    } else {
        None
    }
}

/// Checks only the lines through the most recently played cell.
///
/// Only those lines can have become winning with that move.
pub fn completed_line_through(squares: &[Square; CELL_COUNT], index: usize) -> Option<Player> {
    lines_through(index).find_map(|line| line_owner(squares, line))
}

/// Checks if there is a winner anywhere on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(squares: &[Square; CELL_COUNT]) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(squares, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &str) -> [Square; CELL_COUNT] {
        let mut squares = [Square::Empty; CELL_COUNT];
        for (i, c) in cells.chars().enumerate() {
            squares[i] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        squares
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&grid("---------")), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&grid("XXX-O-O--")), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&grid("XXO-O-OX-")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&grid("XX-------")), None);
    }

    #[test]
    fn test_lines_through_counts() {
        // Corners sit on one diagonal, the center on both, edges on none.
        assert_eq!(lines_through(0).count(), 3);
        assert_eq!(lines_through(4).count(), 4);
        assert_eq!(lines_through(1).count(), 2);
        assert_eq!(lines_through(6).count(), 3);
    }

    #[test]
    fn test_lines_through_contain_cell() {
        for index in 0..CELL_COUNT {
            for line in lines_through(index) {
                assert!(line.contains(&index), "{line:?} misses {index}");
                assert!(LINES.contains(&line), "{line:?} is not a grid line");
            }
        }
    }

    #[test]
    fn test_local_check_ignores_unrelated_lines() {
        let squares = grid("XXX-O-O--");
        assert_eq!(completed_line_through(&squares, 1), Some(Player::X));
        assert_eq!(completed_line_through(&squares, 7), None);
    }
}
