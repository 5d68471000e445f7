use crate::flags::{FeatureFlagKey, FeatureFlagSource};
use crate::navigation::{ChipAction, ChipDescriptor, SessionController};
use crate::page::{IconId, PageKind};

use super::model::{ChipGroups, CloseButton, CloseButtonStyle, SearchInput, TopBarModel};

const HIDE_CLOSE_PREFIXES: [&str; 2] = ["/objects/", "/object/"];
const CLOSE_HOTKEY: &str = "K";

/// Ambient inputs of one top-bar projection.
pub struct TopBarContext<'a> {
    pub flags: &'a dyn FeatureFlagSource,
    pub location: &'a str,
    pub is_mobile: bool,
    /// Object metadata item currently in context, if any.
    pub selected_object_type: Option<&'a str>,
    pub control_symbol: &'a str,
    pub placeholder: &'a str,
}

pub fn build_top_bar(session: &SessionController, ctx: &TopBarContext<'_>) -> TopBarModel {
    let v2 = ctx.flags.is_enabled(FeatureFlagKey::IsCommandMenuV2Enabled);
    let page_kind = session.current_page().kind;

    let back_chip = (v2 && !page_kind.is_root()).then(|| ChipDescriptor {
        icons: vec![IconId::new(IconId::CHEVRON_LEFT)],
        text: String::new(),
        on_activate: Some(ChipAction::GoBack),
    });

    let chip_groups = v2.then(|| {
        let chips = session.chips();
        match ctx.selected_object_type {
            Some(object_type) if page_kind != PageKind::SearchRecords => {
                ChipGroups::WithRecordSelection {
                    object_metadata_item_id: object_type.to_string(),
                    chips,
                }
            }
            _ => ChipGroups::Flat { chips },
        }
    });

    let search_input = page_kind.shows_search_input().then(|| SearchInput {
        value: session.search_text().to_string(),
        placeholder: ctx.placeholder.to_string(),
    });

    let close_button = (!ctx.is_mobile).then(|| CloseButton {
        icon: IconId::new(IconId::CLOSE),
        style: if v2 {
            CloseButtonStyle::Secondary {
                hotkeys: vec![ctx.control_symbol.to_string(), CLOSE_HOTKEY.to_string()],
            }
        } else {
            CloseButtonStyle::LightIcon
        },
        visible: !HIDE_CLOSE_PREFIXES
            .iter()
            .any(|prefix| ctx.location.starts_with(prefix)),
    });

    TopBarModel {
        back_chip,
        chip_groups,
        search_input,
        close_button,
    }
}
