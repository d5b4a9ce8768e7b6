//! Phase-typed game states.
//!
//! Each phase of a round is its own type: a finished game ALWAYS has an
//! outcome, and only an in-progress game accepts moves. Placement after a
//! terminal state is unrepresentable rather than a runtime error.

use super::action::{Move, MoveError};
use super::invariants;
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// The board filled with no line complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round being set up - board empty, first player not yet chosen.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new round in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with the given first player.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - accepts moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Applies a move, consuming self and returning the next phase.
    ///
    /// The win check runs for the placing marker immediately after the
    /// placement, before the opponent gets a turn; the draw check only
    /// fires when no win was found and the board is full.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] when the move's player is not
    /// the one to move, and [`MoveError::SquareOccupied`] when the target
    /// square is taken. The board is untouched in both cases.
    #[instrument(skip(self), fields(position = %action.position, player = %action.player))]
    pub fn make_move(mut self, action: Move) -> Result<GameTurn, MoveError> {
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board
            .set(action.position, Square::Occupied(action.player));
        self.history.push(action);

        if rules::has_win(&self.board, action.player) {
            return Ok(GameTurn::Finished(GameFinished {
                board: self.board,
                history: self.history,
                outcome: Outcome::Winner(action.player),
            }));
        }

        if rules::is_full(&self.board) {
            return Ok(GameTurn::Finished(GameFinished {
                board: self.board,
                history: self.history,
                outcome: Outcome::Draw,
            }));
        }

        self.to_move = self.to_move.opponent();

        invariants::assert_invariants(&self);

        Ok(GameTurn::InProgress(self))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions in ascending keypad order.
    pub fn open_squares(&self) -> Vec<Position> {
        Position::open_squares(&self.board)
    }

    /// Replays moves from an empty board.
    ///
    /// The first move's player starts; each move is validated the same
    /// way as live play.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameTurn, MoveError> {
        let first = moves.first().map(|m| m.player).unwrap_or(Player::X);
        let mut game = GameSetup::new().start(first);

        for action in moves {
            match game.make_move(*action)? {
                GameTurn::InProgress(g) => game = g,
                GameTurn::Finished(g) => return Ok(GameTurn::Finished(g)),
            }
        }

        Ok(GameTurn::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
///
/// The outcome is always present; there is no `Option` to unwrap.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Discards this round and returns a fresh setup.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Result
// ─────────────────────────────────────────────────────────────

/// Result of applying a move.
#[derive(Debug)]
pub enum GameTurn {
    /// Round continues with the opponent to move.
    InProgress(GameInProgress),
    /// Round finished.
    Finished(GameFinished),
}
