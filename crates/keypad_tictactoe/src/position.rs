//! Board positions in the keypad convention.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Cells are publicly addressed by their keypad digit, the way the digits
/// sit on a numeric keypad: bottom row 1-2-3, middle row 4-5-6, top row
/// 7-8-9. Variants are declared in ascending digit order, so iteration
/// visits digit 1 first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Bottom-left (keypad 1)
    BottomLeft,
    /// Bottom-center (keypad 2)
    BottomCenter,
    /// Bottom-right (keypad 3)
    BottomRight,
    /// Middle-left (keypad 4)
    MiddleLeft,
    /// Center (keypad 5)
    Center,
    /// Middle-right (keypad 6)
    MiddleRight,
    /// Top-left (keypad 7)
    TopLeft,
    /// Top-center (keypad 8)
    TopCenter,
    /// Top-right (keypad 9)
    TopRight,
}

impl Position {
    /// Creates a position from its keypad digit.
    ///
    /// Returns `None` for anything outside 1-9; this is the single
    /// fallible boundary for position input.
    #[instrument]
    pub fn from_keypad(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Position::BottomLeft),
            2 => Some(Position::BottomCenter),
            3 => Some(Position::BottomRight),
            4 => Some(Position::MiddleLeft),
            5 => Some(Position::Center),
            6 => Some(Position::MiddleRight),
            7 => Some(Position::TopLeft),
            8 => Some(Position::TopCenter),
            9 => Some(Position::TopRight),
            _ => None,
        }
    }

    /// Returns the keypad digit for this position.
    pub fn keypad_digit(self) -> u8 {
        match self {
            Position::BottomLeft => 1,
            Position::BottomCenter => 2,
            Position::BottomRight => 3,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::TopLeft => 7,
            Position::TopCenter => 8,
            Position::TopRight => 9,
        }
    }

    /// Index into the board's backing array.
    pub(crate) fn slot(self) -> usize {
        self.keypad_digit() as usize - 1
    }

    /// Returns the empty positions of `board` in ascending keypad order.
    #[instrument(skip(board))]
    pub fn open_squares(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keypad_digit())
    }
}
