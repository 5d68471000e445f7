mod kind;
mod types;

pub use kind::PageKind;
pub use types::{IconId, Page};
