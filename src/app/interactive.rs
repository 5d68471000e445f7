use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::command::{Command, CommandOutcome};
use crate::error::AppResult;
use crate::input::map_key_to_command_with_preset;

use super::core::App;
use super::terminal_session::{LineSurface, TerminalSession};

pub(crate) struct KeyOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) redraw: bool,
}

impl App {
    /// Reads keys until quit, redrawing the top bar on one terminal line.
    pub fn run_interactive(&mut self) -> AppResult<()> {
        let mut terminal = TerminalSession::enter()?;
        self.execute(Command::Open)?;
        terminal.draw_line(&self.status_line())?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }

            let outcome = self.handle_key(key);
            if outcome.quit_requested {
                break;
            }
            if outcome.redraw {
                terminal.draw_line(&self.status_line())?;
            }
        }

        terminal.restore()?;
        Ok(())
    }

    /// Navigation keys go through the keymap; the rest edit the search field
    /// while the active page shows it. Failed commands are reported on the
    /// status line.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let preset = self.keymap_preset();
        let cmd = map_key_to_command_with_preset(key, &self.session, preset).or_else(|| {
            if self.session.is_open() && self.session.current_page().kind.shows_search_input() {
                self.search_field.handle_key(key)
            } else {
                None
            }
        });
        let Some(cmd) = cmd else {
            return KeyOutcome {
                quit_requested: false,
                redraw: false,
            };
        };

        debug!(command = cmd.action_id().as_str(), "key mapped");
        match self.execute(cmd) {
            Ok(result) => KeyOutcome {
                quit_requested: result.outcome == CommandOutcome::QuitRequested,
                redraw: true,
            },
            Err(err) => {
                self.status.message = err.to_string();
                KeyOutcome {
                    quit_requested: false,
                    redraw: true,
                }
            }
        }
    }

    pub(crate) fn status_line(&self) -> String {
        if !self.session.is_open() {
            return format!("(closed, {}+K to open)", self.config.top_bar.control_symbol);
        }
        let bar = self.top_bar().to_string();
        match self.status.last_action_id {
            Some(action) if !self.status.message.is_empty() => {
                format!("{bar}  | {}: {}", action.as_str(), self.status.message)
            }
            _ => bar,
        }
    }
}
