//! First-class runtime invariants.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and checked after every applied move
//! in debug builds.

use super::typestate::GameInProgress;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);

/// Asserts that all invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(game: &GameInProgress) {
    if let Err(violations) = EngineInvariants::check_all(game) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariant violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSetup, GameTurn, Move, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = GameSetup::new().start(Player::X);
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = vec![
            Move::new(Player::X, Position::BottomLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
        ];

        let GameTurn::InProgress(game) =
            crate::GameInProgress::replay(&moves).expect("valid replay")
        else {
            panic!("Expected in-progress game");
        };
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        let GameTurn::InProgress(mut game) = game.make_move(action).expect("valid move") else {
            panic!("Expected in-progress game");
        };

        // Corrupt the board behind the history's back
        game.board.set(Position::BottomLeft, Square::Occupied(Player::O));

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }
}
