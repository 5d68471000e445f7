mod dispatch;
mod parse;
mod spec;
mod types;

pub use dispatch::{CommandDispatchResult, dispatch};
pub use parse::parse_command_text;
pub use spec::{command_registry, find_command_spec, usage_lines};
pub use types::{ActionId, ArgKind, ArgSpec, Command, CommandOutcome, CommandSpec};
