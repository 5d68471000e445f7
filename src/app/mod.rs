mod core;
mod interactive;
mod script;
mod state;
mod terminal_session;

pub use core::App;
pub use script::OutputFormat;
pub use state::StatusState;
