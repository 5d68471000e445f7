use crossterm::event::{Event, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::command::Command;

/// Text-editing collaborator for the search input. It owns cursor and
/// editing state; the session only ever sees the resulting value.
#[derive(Debug, Default)]
pub struct SearchField {
    input: Input,
}

impl SearchField {
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Returns a `search` command when the key changed the value.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let changed = self.input.handle_event(&Event::Key(key))?;
        changed.value.then(|| Command::Search {
            text: self.input.value().to_string(),
        })
    }

    /// Follows the session value after it changed elsewhere (e.g. on close).
    pub fn sync(&mut self, value: &str) {
        if self.input.value() != value {
            self.input = Input::new(value.to_string());
        }
    }
}
