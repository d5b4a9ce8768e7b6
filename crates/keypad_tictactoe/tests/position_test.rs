//! Tests for the keypad position enum.

use keypad_tictactoe::{Board, Player, Position, Square};
use strum::IntoEnumIterator;

#[test]
fn test_position_from_keypad() {
    assert_eq!(Position::from_keypad(1), Some(Position::BottomLeft));
    assert_eq!(Position::from_keypad(5), Some(Position::Center));
    assert_eq!(Position::from_keypad(9), Some(Position::TopRight));
    assert_eq!(Position::from_keypad(0), None);
    assert_eq!(Position::from_keypad(10), None);
}

#[test]
fn test_keypad_digit_round_trip() {
    for pos in Position::iter() {
        assert_eq!(Position::from_keypad(pos.keypad_digit()), Some(pos));
    }
}

#[test]
fn test_iteration_is_ascending() {
    let digits: Vec<u8> = Position::iter().map(Position::keypad_digit).collect();
    assert_eq!(digits, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_open_squares_empty_board() {
    let board = Board::new();
    let open = Position::open_squares(&board);
    assert_eq!(open.len(), 9); // every square open at round start
}

#[test]
fn test_open_squares_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::BottomLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let open = Position::open_squares(&board);
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::BottomLeft));
    assert!(!open.contains(&Position::Center));
    assert!(open.contains(&Position::TopRight));
}

#[test]
fn test_display_is_keypad_digit() {
    assert_eq!(Position::BottomLeft.to_string(), "1");
    assert_eq!(Position::TopRight.to_string(), "9");
}
