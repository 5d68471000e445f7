mod builder;
mod model;

pub use builder::{TopBarContext, build_top_bar};
pub use model::{ChipGroups, CloseButton, CloseButtonStyle, SearchInput, TopBarModel};
