//! Round orchestration between the human and the computer.

use crate::input::prompt_line;
use crate::players::{BotPlayer, HumanPlayer, Player};
use crate::screen;
use anyhow::Result;
use keypad_tictactoe::{GameSetup, GameTurn, Move, Outcome, Player as Mark, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

/// Runs rounds until the human declines a replay.
pub struct Session {
    player_name: String,
    strategy: Strategy,
    rng: StdRng,
}

impl Session {
    /// Creates a new session.
    pub fn new(player_name: String, strategy: Strategy, rng: StdRng) -> Self {
        Self {
            player_name,
            strategy,
            rng,
        }
    }

    /// Runs the session: round, replay prompt, repeat.
    pub fn run(mut self) -> Result<()> {
        println!("Welcome to keypad tic-tac-toe!");

        loop {
            self.play_round()?;

            let answer = prompt_line("Play again? (y/n): ")?;
            if !answer.to_lowercase().starts_with('y') {
                break;
            }
        }

        println!("Thanks for playing!");
        Ok(())
    }

    /// Plays a single round to its terminal state.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<()> {
        // The human picks a marker; the computer takes the complement
        let human_mark = prompt_marker()?;
        let bot_mark = human_mark.opponent();

        let mut human = HumanPlayer::new(self.player_name.clone());
        let mut bot = BotPlayer::new("Computer", self.strategy, StdRng::from_rng(&mut self.rng));

        // Coin flip for the first move
        let first = if self.rng.random::<bool>() {
            human_mark
        } else {
            bot_mark
        };
        let starter = if first == human_mark {
            human.name().to_string()
        } else {
            bot.name().to_string()
        };
        println!("{starter} goes first.");
        info!(%human_mark, %first, "Round started");

        let mut turn = GameTurn::InProgress(GameSetup::new().start(first));

        loop {
            match turn {
                GameTurn::InProgress(game) => {
                    screen::redraw(game.board())?;

                    let mark = game.to_move();
                    let player: &mut dyn Player = if mark == human_mark {
                        &mut human
                    } else {
                        &mut bot
                    };
                    println!("{} to move: {}", mark, player.name());

                    let position = player.next_move(&game)?;
                    turn = game.make_move(Move::new(mark, position))?;
                }
                GameTurn::Finished(done) => {
                    screen::redraw(done.board())?;

                    match done.outcome() {
                        Outcome::Winner(mark) => {
                            let winner = if *mark == human_mark {
                                human.name()
                            } else {
                                bot.name()
                            };
                            println!("{winner} wins the round!");
                        }
                        Outcome::Draw => println!("It's a draw!"),
                    }

                    info!(outcome = %done.outcome(), moves = done.history().len(), "Round finished");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Prompts until the human picks X or O (case-insensitive).
fn prompt_marker() -> Result<Mark> {
    loop {
        let line = prompt_line("Choose your marker (X or O): ")?;
        match line.to_uppercase().as_str() {
            "X" => return Ok(Mark::X),
            "O" => return Ok(Mark::O),
            _ => println!("Enter X or O."),
        }
    }
}
