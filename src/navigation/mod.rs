mod chips;
mod session;
mod store;


pub use chips::{ChipAction, ChipDescriptor, project};
pub use session::{SessionController, SessionPhase, Visibility};
pub use store::PageStackStore;
