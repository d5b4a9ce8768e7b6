//! Board rendering on the console.

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use keypad_tictactoe::Board;
use std::io::{self, Write};

/// Clears the screen and redraws the board.
///
/// Called after every mutation so the console always shows the current
/// state: top row 7-8-9, middle 4-5-6, bottom 1-2-3.
pub fn redraw(board: &Board) -> Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{}", board.render())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
