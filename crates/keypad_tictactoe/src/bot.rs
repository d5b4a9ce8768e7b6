//! Heuristic move selection for the computer opponent.
//!
//! One ply only: the scan finds immediate wins (and, for the defending
//! strategy, immediate opponent wins to block), never forced wins two or
//! more moves ahead. Anything else falls back to a uniform random pick
//! among the empty squares.

use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use rand::prelude::IndexedRandom;
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Error that can occur when selecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BotError {
    /// No empty square is left to choose from.
    #[display("No empty squares left on the board")]
    BoardFull,
}

impl std::error::Error for BotError {}

/// How the computer opponent picks its moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Uniform random pick among the empty squares.
    Random,
    /// Take an immediate win when one exists, else play randomly.
    Attacking,
    /// Take an immediate win, else block the opponent's, else play
    /// randomly.
    #[default]
    Defending,
}

impl Strategy {
    /// Picks a move for `player` on `board` according to the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::BoardFull`] when no square is empty.
    #[instrument(skip(board, rng))]
    pub fn pick<R: Rng + ?Sized>(
        self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<Position, BotError> {
        let choice = match self {
            Strategy::Random => random_move(board, rng),
            Strategy::Attacking => attacking_move(board, player, rng),
            Strategy::Defending => defending_move(board, player, rng),
        }?;
        debug!(position = %choice, %player, "Bot chose position");
        Ok(choice)
    }
}

/// Finds a position where placing `player`'s marker wins immediately.
///
/// Scans the empty squares in ascending keypad order, tentatively placing
/// the marker on a scratch copy, checking for a win, and reverting before
/// the next candidate. Returns the first winning position, so ties break
/// to the lowest keypad digit. The caller's board is never mutated.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    let mut probe = board.clone();

    for pos in Position::iter() {
        if !probe.is_empty(pos) {
            continue;
        }

        probe.set(pos, Square::Occupied(player));
        let wins = rules::has_win(&probe, player);
        probe.set(pos, Square::Empty);

        if wins {
            return Some(pos);
        }
    }

    None
}

/// Picks a uniformly random empty position.
///
/// # Errors
///
/// Returns [`BotError::BoardFull`] when no square is empty; callers that
/// check terminal states after every placement never reach this.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, BotError> {
    let open = Position::open_squares(board);
    open.choose(rng).copied().ok_or(BotError::BoardFull)
}

/// Picks an immediately winning position, falling back to a random one.
#[instrument(skip(board, rng))]
pub fn attacking_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Position, BotError> {
    match winning_move(board, player) {
        Some(pos) => Ok(pos),
        None => random_move(board, rng),
    }
}

/// Picks a win, else blocks the opponent's win, else plays randomly.
///
/// The block reuses the winning-position scan with the opponent's marker:
/// the square where the opponent would complete a line is exactly the
/// square to take.
#[instrument(skip(board, rng))]
pub fn defending_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Position, BotError> {
    if let Some(pos) = winning_move(board, player) {
        return Ok(pos);
    }
    if let Some(pos) = winning_move(board, player.opponent()) {
        return Ok(pos);
    }
    random_move(board, rng)
}
