use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};

use crate::error::AppResult;

pub(crate) trait LineSurface {
    /// Replaces the current terminal line with `text`.
    fn draw_line(&mut self, text: &str) -> io::Result<()>;
}

/// Raw-mode guard for the interactive loop. Restores the terminal on drop.
pub(crate) struct TerminalSession {
    stdout: Stdout,
    active: bool,
}

impl TerminalSession {
    pub(crate) fn enter() -> AppResult<Self> {
        enable_raw_mode()?;
        Ok(Self {
            stdout: io::stdout(),
            active: true,
        })
    }

    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        disable_raw_mode()?;
        execute!(self.stdout, MoveToColumn(0))?;
        writeln!(self.stdout)?;
        self.active = false;
        Ok(())
    }
}

impl LineSurface for TerminalSession {
    fn draw_line(&mut self, text: &str) -> io::Result<()> {
        execute!(self.stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        write!(self.stdout, "{text}")?;
        self.stdout.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
