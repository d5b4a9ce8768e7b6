//! Player trait and implementations.

use crate::input::prompt_line;
use anyhow::Result;
use keypad_tictactoe::{Board, GameInProgress, Position, Strategy};
use rand::rngs::StdRng;
use tracing::debug;

/// A participant that can produce moves for an in-progress round.
pub trait Player {
    /// Gets the next move from this player.
    ///
    /// The returned position is always empty on the given game's board.
    fn next_move(&mut self, game: &GameInProgress) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Human player reading keypad digits from stdin.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn next_move(&mut self, game: &GameInProgress) -> Result<Position> {
        loop {
            let line = prompt_line("Choose a position (1-9): ")?;
            match parse_choice(&line, game.board()) {
                Ok(pos) => return Ok(pos),
                Err(reason) => println!("{reason}"),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Why an input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum ChoiceError {
    /// Not a digit between 1 and 9.
    #[display("Enter a number from 1 to 9.")]
    OutOfRange,
    /// The chosen square is occupied.
    #[display("Square {} is already taken. Choose another.", _0)]
    Taken(Position),
}

fn parse_choice(input: &str, board: &Board) -> Result<Position, ChoiceError> {
    let digit: u8 = input.trim().parse().map_err(|_| ChoiceError::OutOfRange)?;
    let pos = Position::from_keypad(digit).ok_or(ChoiceError::OutOfRange)?;
    if !board.is_empty(pos) {
        return Err(ChoiceError::Taken(pos));
    }
    Ok(pos)
}

/// Computer player backed by the engine's heuristic strategies.
pub struct BotPlayer {
    name: String,
    strategy: Strategy,
    rng: StdRng,
}

impl BotPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, strategy: Strategy, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            strategy,
            rng,
        }
    }
}

impl Player for BotPlayer {
    fn next_move(&mut self, game: &GameInProgress) -> Result<Position> {
        let pos = self
            .strategy
            .pick(game.board(), game.to_move(), &mut self.rng)?;
        debug!(position = %pos, strategy = %self.strategy, "Bot move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
