use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::navigation::SessionController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

/// Navigation keys only; anything unmapped belongs to the search field.
pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    session: &SessionController,
    preset: KeymapPreset,
) -> Option<Command> {
    match preset {
        KeymapPreset::Default => map_key_default(key, session),
        KeymapPreset::Emacs => map_key_emacs(key, session),
    }
}

fn map_key_default(key: KeyEvent, session: &SessionController) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('k') => Some(Command::Toggle),
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        // Alt+1..9 jumps to a chip.
        return match key.code {
            KeyCode::Char(digit @ '1'..='9') => digit.to_digit(10).map(|n| Command::Chip {
                index: n as usize - 1,
            }),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc if session.depth() > 0 => Some(Command::Back),
        KeyCode::Esc => Some(Command::Close),
        KeyCode::Backspace if session.search_text().is_empty() && session.depth() > 0 => {
            Some(Command::Back)
        }
        _ => None,
    }
}

fn map_key_emacs(key: KeyEvent, session: &SessionController) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('g') => return Some(Command::Close),
            KeyCode::Char('b') => return Some(Command::Back),
            _ => {}
        }
    }
    map_key_default(key, session)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::command::Command;
    use crate::navigation::SessionController;
    use crate::page::{IconId, Page, PageKind};

    use super::{KeymapPreset, map_key_to_command_with_preset};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn map_default(key: KeyEvent, session: &SessionController) -> Option<Command> {
        map_key_to_command_with_preset(key, session, KeymapPreset::Default)
    }

    fn session_at_search() -> SessionController {
        let mut session = SessionController::default();
        session.push_page(Page::root());
        session.push_page(Page::new(
            PageKind::SearchRecords,
            "Search",
            IconId::new("IconSearch"),
        ));
        session
    }

    #[test]
    fn keymap_preset_parse_defaults_on_unknown_values() {
        assert_eq!(KeymapPreset::parse("default"), KeymapPreset::Default);
        assert_eq!(KeymapPreset::parse("emacs"), KeymapPreset::Emacs);
        assert_eq!(KeymapPreset::parse("vim"), KeymapPreset::Default);
    }

    #[test]
    fn escape_goes_back_before_closing() {
        let mut session = session_at_search();
        assert_eq!(
            map_default(key(KeyCode::Esc), &session),
            Some(Command::Back)
        );

        session.go_back();
        assert_eq!(
            map_default(key(KeyCode::Esc), &session),
            Some(Command::Close)
        );
    }

    #[test]
    fn backspace_goes_back_only_with_empty_search() {
        let mut session = session_at_search();
        assert_eq!(
            map_default(key(KeyCode::Backspace), &session),
            Some(Command::Back)
        );

        session.set_search_text("a");
        assert_eq!(map_default(key(KeyCode::Backspace), &session), None);
        assert_eq!(map_default(key(KeyCode::Char('b')), &session), None);
    }

    #[test]
    fn ctrl_k_toggles_and_alt_digit_jumps() {
        let session = session_at_search();
        assert_eq!(
            map_default(
                KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
                &session
            ),
            Some(Command::Toggle)
        );
        assert_eq!(
            map_default(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT), &session),
            Some(Command::Chip { index: 1 })
        );
    }

    #[test]
    fn emacs_preset_maps_ctrl_g_and_ctrl_b() {
        let session = session_at_search();
        assert_eq!(
            map_key_to_command_with_preset(
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL),
                &session,
                KeymapPreset::Emacs,
            ),
            Some(Command::Close)
        );
        assert_eq!(
            map_key_to_command_with_preset(
                KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL),
                &session,
                KeymapPreset::Emacs,
            ),
            Some(Command::Back)
        );
        assert_eq!(
            map_key_to_command_with_preset(
                KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
                &session,
                KeymapPreset::Emacs,
            ),
            Some(Command::Toggle)
        );
    }
}
