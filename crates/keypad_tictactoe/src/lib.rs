//! Keypad tic-tac-toe - game engine with a win-or-block opponent.
//!
//! The board is addressed like a phone keypad: the bottom row is 1-2-3,
//! the middle row 4-5-6, the top row 7-8-9. The engine is a pure,
//! synchronous library; the console front-end lives in `keypad_cli`.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`]
//! - **Typestate**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`],
//!   with every transition returned explicitly as a [`GameTurn`]
//! - **Rules**: win and draw detection over the 8 fixed lines
//! - **Bot**: one-ply heuristic move selection (win, block, random)
//! - **Invariants**: runtime-checked board and turn properties
//!
//! # Example
//!
//! ```
//! use keypad_tictactoe::{GameSetup, GameTurn, Move, Player, Position};
//!
//! # fn main() -> Result<(), keypad_tictactoe::MoveError> {
//! let game = GameSetup::new().start(Player::X);
//! let turn = game.make_move(Move::new(Player::X, Position::Center))?;
//! assert!(matches!(turn, GameTurn::InProgress(_)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod bot;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use bot::{BotError, Strategy};
pub use position::Position;
pub use types::{Board, Player, Square};
pub use typestate::{GameFinished, GameInProgress, GameSetup, GameTurn, Outcome};
