//! Win detection logic.

use super::super::position::Position;
use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
///
/// Listed in the keypad convention (rows top to bottom as the console
/// renders them: 7-8-9, 4-5-6, 1-2-3).
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether the given player has three in a row.
///
/// True iff one of the 8 lines is uniformly the player's marker.
/// Never mutates the board.
#[instrument(skip(board))]
pub fn has_win(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if either player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_win(&board, Player::X));
        assert!(!has_win(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(has_win(&board, Player::X));
        assert!(!has_win(&board, Player::O));
    }

    #[test]
    fn test_winner_keypad_diagonal() {
        // O at 7, 5, 3
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
        assert!(has_win(&board, Player::O));
        assert!(!has_win(&board, Player::X));
    }

    #[test]
    fn test_winner_column() {
        // X down the left column: 7, 4, 1
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_has_win_does_not_mutate() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let before = board.clone();
        let _ = has_win(&board, Player::X);
        let _ = check_winner(&board);
        assert_eq!(board, before);
    }
}
