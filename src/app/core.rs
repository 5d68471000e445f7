use tracing::{debug, warn};

use crate::command::{ActionId, Command, CommandDispatchResult, dispatch};
use crate::config::Config;
use crate::error::AppResult;
use crate::event::SessionEvent;
use crate::flags::StaticFeatureFlags;
use crate::input::{KeymapPreset, SearchField};
use crate::navigation::SessionController;
use crate::topbar::{TopBarContext, TopBarModel, build_top_bar};

use super::state::StatusState;

pub struct App {
    pub session: SessionController,
    pub status: StatusState,
    pub config: Config,
    pub flags: StaticFeatureFlags,
    pub selected_object_type: Option<String>,
    pub(crate) search_field: SearchField,
}

impl App {
    pub fn new() -> AppResult<Self> {
        let config = Config::load()?;
        Ok(Self::new_with_config(config))
    }

    pub fn new_with_config(config: Config) -> Self {
        Self {
            session: SessionController::default(),
            status: StatusState::default(),
            flags: StaticFeatureFlags::from_config(&config.features),
            config,
            selected_object_type: None,
            search_field: SearchField::default(),
        }
    }

    pub fn keymap_preset(&self) -> KeymapPreset {
        KeymapPreset::parse(&self.config.keymap.preset)
    }

    pub fn top_bar(&self) -> TopBarModel {
        let ctx = TopBarContext {
            flags: &self.flags,
            location: &self.config.top_bar.location,
            is_mobile: self.config.top_bar.is_mobile,
            selected_object_type: self.selected_object_type.as_deref(),
            control_symbol: &self.config.top_bar.control_symbol,
            placeholder: &self.config.top_bar.placeholder,
        };
        build_top_bar(&self.session, &ctx)
    }

    pub fn execute(&mut self, cmd: Command) -> AppResult<CommandDispatchResult> {
        let result = dispatch(&mut self.session, &mut self.status, cmd).inspect_err(|err| {
            warn!(error = %err, "command failed");
        })?;
        self.apply_events(&result.emitted_events);
        Ok(result)
    }

    /// Closing clears the session search text, so the field resyncs on
    /// visibility and page changes as well as on `search` commands.
    fn apply_events(&mut self, events: &[SessionEvent]) {
        for event in events {
            debug!(?event, "session event");
            let resync = match event {
                SessionEvent::PageChanged { .. } | SessionEvent::VisibilityChanged { .. } => true,
                SessionEvent::CommandExecuted { id, .. } => *id == ActionId::Search,
            };
            if resync {
                self.search_field.sync(self.session.search_text());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::command::Command;
    use crate::config::Config;
    use crate::event::SessionEvent;
    use crate::page::Page;
    use crate::topbar::CloseButtonStyle;

    #[test]
    fn legacy_config_switches_close_button_style() {
        let mut config = Config::default();
        config.features.command_menu_v2 = false;
        let mut app = App::new_with_config(config);
        app.execute(Command::Open).expect("open should succeed");

        let model = app.top_bar();
        assert_eq!(model.chip_groups, None);
        assert_eq!(
            model.close_button.map(|button| button.style),
            Some(CloseButtonStyle::LightIcon)
        );
    }

    #[test]
    fn execute_close_resets_search_field() {
        let mut app = App::new_with_config(Config::default());
        app.execute(Command::Push { page: Page::root() })
            .expect("push should succeed");
        app.execute(Command::Search {
            text: "acme".to_string(),
        })
        .expect("search should succeed");
        assert_eq!(app.search_field.value(), "acme");

        app.execute(Command::Close).expect("close should succeed");
        assert_eq!(app.search_field.value(), "");
    }

    #[test]
    fn execute_reports_page_and_visibility_changes() {
        let mut app = App::new_with_config(Config::default());
        let result = app
            .execute(Command::Push { page: Page::root() })
            .expect("push should succeed");
        assert!(
            result
                .emitted_events
                .iter()
                .any(|event| matches!(event, SessionEvent::VisibilityChanged { .. }))
        );

        let result = app
            .execute(Command::Search {
                text: "acme".to_string(),
            })
            .expect("search should succeed");
        assert!(
            !result
                .emitted_events
                .iter()
                .any(|event| matches!(event, SessionEvent::PageChanged { .. }))
        );
        assert_eq!(app.search_field.value(), "acme");
    }
}
