use std::fmt;

use serde::Serialize;

use crate::navigation::ChipDescriptor;
use crate::page::IconId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum ChipGroups {
    Flat {
        chips: Vec<ChipDescriptor>,
    },
    /// Chips prefixed by the record selection of the object in context.
    WithRecordSelection {
        object_metadata_item_id: String,
        chips: Vec<ChipDescriptor>,
    },
}

impl ChipGroups {
    pub fn chips(&self) -> &[ChipDescriptor] {
        match self {
            Self::Flat { chips } | Self::WithRecordSelection { chips, .. } => chips,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchInput {
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum CloseButtonStyle {
    LightIcon,
    Secondary { hotkeys: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseButton {
    pub icon: IconId,
    pub style: CloseButtonStyle,
    /// Hidden buttons still reserve their slot.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBarModel {
    pub back_chip: Option<ChipDescriptor>,
    pub chip_groups: Option<ChipGroups>,
    pub search_input: Option<SearchInput>,
    pub close_button: Option<CloseButton>,
}

impl fmt::Display for TopBarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.back_chip.is_some() {
            parts.push("[<]".to_string());
        }

        if let Some(groups) = &self.chip_groups {
            let mut trail = Vec::new();
            if let ChipGroups::WithRecordSelection {
                object_metadata_item_id,
                ..
            } = groups
            {
                trail.push(format!("{{{object_metadata_item_id}}}"));
            }
            for chip in groups.chips() {
                match chip.on_activate {
                    Some(_) => trail.push(format!("[{}]", chip.text)),
                    None => trail.push(format!("*{}*", chip.text)),
                }
            }
            if !trail.is_empty() {
                parts.push(trail.join(" > "));
            }
        }

        if let Some(input) = &self.search_input {
            if input.value.is_empty() {
                parts.push(format!("search: ({})", input.placeholder));
            } else {
                parts.push(format!("search: {}", input.value));
            }
        }

        if let Some(button) = &self.close_button
            && button.visible
        {
            match &button.style {
                CloseButtonStyle::LightIcon => parts.push("[x]".to_string()),
                CloseButtonStyle::Secondary { hotkeys } => {
                    parts.push(format!("[x {}]", hotkeys.join("+")))
                }
            }
        }

        f.write_str(&parts.join("  "))
    }
}
