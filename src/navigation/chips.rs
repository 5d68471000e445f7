use serde::Serialize;

use crate::page::{IconId, Page};

/// What activating a chip asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ChipAction {
    NavigateTo { index: usize },
    GoBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipDescriptor {
    pub icons: Vec<IconId>,
    pub text: String,
    pub on_activate: Option<ChipAction>,
}

impl ChipDescriptor {
    pub fn is_navigable(&self) -> bool {
        self.on_activate.is_some()
    }
}

/// Builds the breadcrumb trail for `pages`.
///
/// Root pages never produce a chip. The last chip marks the current page and
/// carries no action; every other chip jumps back to its own index.
pub fn project(pages: &[Page]) -> Vec<ChipDescriptor> {
    let visible: Vec<&Page> = pages.iter().filter(|page| !page.is_root()).collect();
    let last = visible.len().saturating_sub(1);

    visible
        .into_iter()
        .enumerate()
        .map(|(index, page)| ChipDescriptor {
            icons: vec![page.icon.clone()],
            text: page.title.clone(),
            on_activate: (index != last).then_some(ChipAction::NavigateTo { index }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ChipAction, project};
    use crate::page::{IconId, Page, PageKind};

    #[test]
    fn empty_and_root_only_stacks_project_nothing() {
        assert!(project(&[]).is_empty());
        assert!(project(&[Page::root()]).is_empty());
    }

    #[test]
    fn single_page_chip_is_terminal() {
        let pages = [
            Page::root(),
            Page::new(PageKind::Copilot, "Copilot", IconId::new("IconSparkles")),
        ];
        let chips = project(&pages);

        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].text, "Copilot");
        assert_eq!(chips[0].icons, vec![IconId::new("IconSparkles")]);
        assert_eq!(chips[0].on_activate, None);
    }

    #[test]
    fn chip_actions_use_filtered_indices() {
        let pages = [
            Page::root(),
            Page::new(PageKind::SearchRecords, "Search", IconId::new("IconSearch")),
            Page::new(PageKind::RecordDetail, "Acme", IconId::new("IconBuilding")),
            Page::new(PageKind::WorkflowStepView, "Step", IconId::new("IconBolt")),
        ];
        let actions: Vec<_> = project(&pages).into_iter().map(|c| c.on_activate).collect();

        assert_eq!(
            actions,
            vec![
                Some(ChipAction::NavigateTo { index: 0 }),
                Some(ChipAction::NavigateTo { index: 1 }),
                None,
            ]
        );
    }
}
