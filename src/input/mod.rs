mod keymap;
mod search_field;

pub use keymap::{KeymapPreset, map_key_to_command_with_preset};
pub use search_field::SearchField;
