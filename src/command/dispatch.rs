use tracing::debug;

use crate::app::StatusState;
use crate::error::AppResult;
use crate::event::SessionEvent;
use crate::navigation::SessionController;
use crate::page::Page;

use super::types::{Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<SessionEvent>,
}

pub fn dispatch(
    session: &mut SessionController,
    status: &mut StatusState,
    cmd: Command,
) -> AppResult<CommandDispatchResult> {
    let prev_len = session.pages().len();
    let prev_top = session.pages().last().cloned();
    let prev_depth = session.depth();
    let prev_visibility = session.visibility();
    let action_id = cmd.action_id();
    status.last_action_id = Some(action_id);
    status.message.clear();

    let outcome = match cmd {
        Command::Open => {
            if session.is_open() {
                status.message = "command menu already open".to_string();
                CommandOutcome::Noop
            } else {
                session.open();
                status.message = "opened command menu".to_string();
                CommandOutcome::Applied
            }
        }
        Command::Close => {
            session.close();
            status.message = "closed command menu".to_string();
            CommandOutcome::Applied
        }
        Command::Toggle => {
            session.toggle();
            status.message = if session.is_open() {
                "opened command menu".to_string()
            } else {
                "closed command menu".to_string()
            };
            CommandOutcome::Applied
        }
        Command::Back => {
            if session.go_back() {
                status.message = format!("back -> {}", describe(session.current_page()));
                CommandOutcome::Applied
            } else {
                status.message = "already at root".to_string();
                CommandOutcome::Noop
            }
        }
        Command::Chip { index } => {
            session.navigate_to_chip(index)?;
            status.message = format!("jumped to chip {index}");
            CommandOutcome::Applied
        }
        Command::Search { text } => {
            if session.search_text() == text {
                CommandOutcome::Noop
            } else {
                session.set_search_text(text);
                CommandOutcome::Applied
            }
        }
        Command::Push { page } => {
            status.message = format!("push {}", describe(&page));
            session.push_page(page);
            CommandOutcome::Applied
        }
        Command::Reset { page } => {
            status.message = format!("reset to {}", describe(&page));
            session.navigate(page, true);
            CommandOutcome::Applied
        }
        Command::Show => CommandOutcome::Applied,
        Command::Quit => {
            status.message = "quit requested".to_string();
            CommandOutcome::QuitRequested
        }
    };
    debug!(command = action_id.as_str(), ?outcome, "dispatched");

    let mut emitted_events = Vec::new();
    if session.pages().len() != prev_len || session.pages().last() != prev_top.as_ref() {
        emitted_events.push(SessionEvent::PageChanged {
            from_depth: prev_depth,
            to_depth: session.depth(),
        });
    }
    if session.visibility() != prev_visibility {
        emitted_events.push(SessionEvent::VisibilityChanged {
            from: prev_visibility,
            to: session.visibility(),
        });
    }
    emitted_events.push(SessionEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
    })
}

fn describe(page: &Page) -> String {
    if page.is_root() {
        "root".to_string()
    } else {
        format!("{} ({})", page.title, page.kind.id())
    }
}
