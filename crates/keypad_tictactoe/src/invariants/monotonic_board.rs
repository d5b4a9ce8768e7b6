//! Monotonic board invariant: squares never change once set.

use super::super::types::{Board, Square};
use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: board squares are monotonic (never overwritten or reverted).
///
/// Once a square transitions from Empty to Occupied it stays that way.
/// Verified by replaying the move history onto a fresh board and
/// comparing the result against the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
