use crate::command::{ActionId, CommandOutcome};
use crate::navigation::Visibility;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// Depths are chip counts before and after the command.
    PageChanged {
        from_depth: usize,
        to_depth: usize,
    },
    VisibilityChanged {
        from: Visibility,
        to: Visibility,
    },
}
