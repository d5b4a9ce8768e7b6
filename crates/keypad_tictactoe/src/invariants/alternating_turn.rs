//! Alternating turn invariant: markers strictly alternate.

use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: the move history alternates markers and `to_move` is the
/// opponent of the last mover.
///
/// A direct consequence: the marker counts on the board never differ by
/// more than one.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        for pair in history.windows(2) {
            if pair[1].player != pair[0].player.opponent() {
                return false;
            }
        }

        match history.last() {
            Some(last) => game.to_move() == last.player.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, GameSetup, GameTurn, Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new().start(Player::O);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let moves = vec![
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::BottomRight),
        ];

        let GameTurn::InProgress(game) = GameInProgress::replay(&moves).expect("valid replay")
        else {
            panic!("Expected in-progress game");
        };
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_tampered_history_violates() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        let GameTurn::InProgress(mut game) = game.make_move(action).expect("valid move") else {
            panic!("Expected in-progress game");
        };

        // Duplicate the last mover in the history
        game.history.push(Move::new(Player::X, Position::TopLeft));

        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
