use tracing::debug;

use crate::error::AppResult;
use crate::page::Page;

use super::chips::{ChipAction, ChipDescriptor, project};
use super::store::PageStackStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Closed,
    OpenAtRoot,
    OpenAtDepth(usize),
}

/// Entry point the view binds to. Owns the stack; views only read
/// projections and call these operations.
#[derive(Debug)]
pub struct SessionController {
    store: PageStackStore,
    visibility: Visibility,
    root: Page,
}

impl Default for SessionController {
    fn default() -> Self {
        Self {
            store: PageStackStore::default(),
            visibility: Visibility::Closed,
            root: Page::root(),
        }
    }
}

impl SessionController {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.visibility, self.depth()) {
            (Visibility::Closed, _) => SessionPhase::Closed,
            (Visibility::Open, 0) => SessionPhase::OpenAtRoot,
            (Visibility::Open, depth) => SessionPhase::OpenAtDepth(depth),
        }
    }

    /// Number of chips the current stack projects to.
    pub fn depth(&self) -> usize {
        self.store.filtered_len()
    }

    pub fn pages(&self) -> &[Page] {
        self.store.pages()
    }

    pub fn search_text(&self) -> &str {
        self.store.search_text()
    }

    pub fn current_page(&self) -> &Page {
        self.store.active_page().unwrap_or(&self.root)
    }

    pub fn chips(&self) -> Vec<ChipDescriptor> {
        project(self.store.pages())
    }

    pub fn open(&mut self) {
        if self.visibility == Visibility::Closed {
            debug!(depth = self.depth(), "open session");
        }
        self.visibility = Visibility::Open;
    }

    pub fn close(&mut self) {
        if self.visibility == Visibility::Open {
            debug!(depth = self.depth(), "close session");
        }
        self.store.clear();
        self.visibility = Visibility::Closed;
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        }
    }

    pub fn go_back(&mut self) -> bool {
        self.store.pop_one()
    }

    pub fn navigate_to_chip(&mut self, index: usize) -> AppResult<()> {
        self.store.truncate_to(index)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.store.set_search_text(text);
    }

    /// Pushes `page`, opening the session first when it is closed.
    pub fn push_page(&mut self, page: Page) {
        self.navigate(page, false);
    }

    pub fn navigate(&mut self, page: Page, reset: bool) {
        self.open();
        if reset {
            self.store.replace_with(page);
        } else {
            self.store.push(page);
        }
    }

    pub fn activate(&mut self, action: ChipAction) -> AppResult<()> {
        match action {
            ChipAction::NavigateTo { index } => self.navigate_to_chip(index),
            ChipAction::GoBack => {
                self.go_back();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionController, SessionPhase};
    use crate::navigation::ChipAction;
    use crate::page::{IconId, Page, PageKind};

    fn search_page() -> Page {
        Page::new(PageKind::SearchRecords, "Search", IconId::new("IconSearch"))
    }

    #[test]
    fn phases_follow_open_push_back_close() {
        let mut session = SessionController::default();
        assert_eq!(session.phase(), SessionPhase::Closed);

        session.open();
        assert_eq!(session.phase(), SessionPhase::OpenAtRoot);

        session.push_page(search_page());
        assert_eq!(session.phase(), SessionPhase::OpenAtDepth(1));

        assert!(session.go_back());
        assert_eq!(session.phase(), SessionPhase::OpenAtRoot);

        session.close();
        assert_eq!(session.phase(), SessionPhase::Closed);
    }

    #[test]
    fn current_page_falls_back_to_root_sentinel() {
        let mut session = SessionController::default();
        assert!(session.current_page().is_root());

        session.push_page(search_page());
        assert_eq!(session.current_page().kind, PageKind::SearchRecords);
    }

    #[test]
    fn push_page_opens_closed_session() {
        let mut session = SessionController::default();
        session.push_page(search_page());
        assert!(session.is_open());
    }

    #[test]
    fn toggle_closes_and_clears() {
        let mut session = SessionController::default();
        session.push_page(search_page());
        session.set_search_text("acme");

        session.toggle();
        assert!(!session.is_open());
        assert!(session.pages().is_empty());
        assert_eq!(session.search_text(), "");

        session.toggle();
        assert_eq!(session.phase(), SessionPhase::OpenAtRoot);
    }

    #[test]
    fn navigate_with_reset_replaces_history() {
        let mut session = SessionController::default();
        session.push_page(Page::root());
        session.push_page(search_page());

        session.navigate(
            Page::new(PageKind::Copilot, "Copilot", IconId::new("IconSparkles")),
            true,
        );
        assert_eq!(session.pages().len(), 1);
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn activate_dispatches_chip_actions() {
        let mut session = SessionController::default();
        session.push_page(Page::root());
        session.push_page(search_page());
        session.push_page(Page::new(
            PageKind::RecordDetail,
            "Acme",
            IconId::new("IconBuilding"),
        ));

        session
            .activate(ChipAction::GoBack)
            .expect("go back never fails");
        assert_eq!(session.depth(), 1);

        let err = session.activate(ChipAction::NavigateTo { index: 3 });
        assert!(err.is_err());
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn search_text_is_stored_verbatim() {
        let mut session = SessionController::default();
        session.open();
        session.set_search_text("  Acme  ");
        session.set_search_text("  Acme Inc ");
        assert_eq!(session.search_text(), "  Acme Inc ");
    }
}
