use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::page::Page;

/// Navigation history of one command-menu session plus its search text.
///
/// Every public index is expressed in the Root-filtered space, the same
/// space the chip trail is built in.
#[derive(Debug, Default)]
pub struct PageStackStore {
    pages: Vec<Page>,
    search_text: String,
}

impl PageStackStore {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn filtered_len(&self) -> usize {
        self.pages.iter().filter(|page| !page.is_root()).count()
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.pages.last()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn push(&mut self, page: Page) {
        debug!(
            kind = page.kind.id(),
            title = %page.title,
            depth = self.pages.len() + 1,
            "push page"
        );
        self.pages.push(page);
    }

    /// Replaces the whole history with `page`.
    pub fn replace_with(&mut self, page: Page) {
        debug!(kind = page.kind.id(), dropped = self.pages.len(), "reset stack");
        self.pages.clear();
        self.pages.push(page);
    }

    /// Keeps every entry up to and including the `index`-th non-Root page.
    pub fn truncate_to(&mut self, index: usize) -> AppResult<()> {
        let Some(position) = self.raw_position(index) else {
            let len = self.filtered_len();
            warn!(index, len, "rejected chip index");
            return Err(AppError::invalid_index(index, len));
        };

        let before = self.pages.len();
        self.pages.truncate(position + 1);
        debug!(index, before, after = self.pages.len(), "truncate stack");
        Ok(())
    }

    /// Drops the last non-Root page along with anything stacked after it.
    ///
    /// Returns `false` when there is nothing above Root to go back from.
    pub fn pop_one(&mut self) -> bool {
        let Some(position) = self.pages.iter().rposition(|page| !page.is_root()) else {
            return false;
        };

        let before = self.pages.len();
        self.pages.truncate(position);
        debug!(before, after = self.pages.len(), "pop page");
        true
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.pages.len(), "clear stack");
        self.pages.clear();
        self.search_text.clear();
    }

    fn raw_position(&self, filtered_index: usize) -> Option<usize> {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, page)| !page.is_root())
            .nth(filtered_index)
            .map(|(position, _)| position)
    }
}

#[cfg(test)]
mod tests {
    use super::PageStackStore;
    use crate::error::AppError;
    use crate::page::{IconId, Page, PageKind};

    fn page(kind: PageKind, title: &str) -> Page {
        Page::new(kind, title, IconId::new("IconTest"))
    }

    fn titles(store: &PageStackStore) -> Vec<&str> {
        store.pages().iter().map(|page| page.title.as_str()).collect()
    }

    #[test]
    fn push_keeps_duplicates() {
        let mut store = PageStackStore::default();
        store.push(page(PageKind::SearchRecords, "Search"));
        store.push(page(PageKind::SearchRecords, "Search"));

        assert_eq!(store.filtered_len(), 2);
        assert_eq!(titles(&store), ["Search", "Search"]);
    }

    #[test]
    fn truncate_to_maps_filtered_index_past_root() {
        let mut store = PageStackStore::default();
        store.push(Page::root());
        store.push(page(PageKind::SearchRecords, "Search"));
        store.push(page(PageKind::RecordDetail, "Acme"));
        store.push(page(PageKind::WorkflowStepView, "Step"));

        store.truncate_to(1).expect("index 1 is in range");
        assert_eq!(titles(&store), ["", "Search", "Acme"]);
        assert_eq!(store.active_page().map(|p| p.title.as_str()), Some("Acme"));
    }

    #[test]
    fn truncate_to_rejects_out_of_range_without_mutation() {
        let mut store = PageStackStore::default();
        store.push(Page::root());
        store.push(page(PageKind::SearchRecords, "Search"));

        let err = store.truncate_to(1).expect_err("index 1 is out of range");
        assert!(matches!(err, AppError::InvalidIndex { index: 1, len: 1 }));
        assert_eq!(store.pages().len(), 2);
    }

    #[test]
    fn pop_one_never_removes_root() {
        let mut store = PageStackStore::default();
        assert!(!store.pop_one());

        store.push(Page::root());
        assert!(!store.pop_one());
        assert_eq!(store.pages().len(), 1);

        store.push(page(PageKind::Copilot, "Copilot"));
        assert!(store.pop_one());
        assert_eq!(store.pages().len(), 1);
        assert!(store.pages()[0].is_root());
    }

    #[test]
    fn clear_resets_pages_and_search_text() {
        let mut store = PageStackStore::default();
        store.push(page(PageKind::SearchRecords, "Search"));
        store.set_search_text("acme");

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.search_text(), "");
    }

    #[test]
    fn replace_with_leaves_single_page() {
        let mut store = PageStackStore::default();
        store.push(Page::root());
        store.push(page(PageKind::SearchRecords, "Search"));

        store.replace_with(page(PageKind::RecordDetail, "Acme"));
        assert_eq!(titles(&store), ["Acme"]);
    }
}
