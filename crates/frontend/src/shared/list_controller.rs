//! Shared state machine behind every entity list page: server-filtered
//! row set, client-side pagination, debounced search and the staged
//! delete flow.
//!
//! The controller itself is pure and lives in an `RwSignal`; pages own
//! the timers and network calls. Search uses a generation ticket: each
//! keystroke bumps the generation, the page waits out the debounce window
//! and then asks `take_due_search` whether its ticket is still the latest.
//! Superseded tickets simply yield nothing, so a burst of keystrokes
//! collapses into one fetch.

use contracts::domain::common::RecordId;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;
pub const SEARCH_DEBOUNCE_MS: u32 = 1000;

pub trait ListRow: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;
}

#[derive(Debug, Clone)]
pub struct ListController<R: ListRow> {
    rows: Vec<R>,
    search_query: String,
    search_generation: u64,
    /// 1-indexed, clamped to the available pages.
    page: usize,
    pending_delete: Option<R>,
    is_loading: bool,
    is_deleting: bool,
    is_loaded: bool,
}

impl<R: ListRow> Default for ListController<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            search_query: String::new(),
            search_generation: 0,
            page: 1,
            pending_delete: None,
            is_loading: false,
            is_deleting: false,
            is_loaded: false,
        }
    }
}

impl<R: ListRow> ListController<R> {
    pub fn new() -> Self {
        Self::default()
    }

    // --- search -----------------------------------------------------------

    /// Records the new search text, snaps back to page 1 immediately and
    /// returns the debounce ticket for this keystroke.
    pub fn set_search(&mut self, query: impl Into<String>) -> u64 {
        self.search_query = query.into();
        self.page = 1;
        self.search_generation += 1;
        self.search_generation
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// After the debounce window: the query to fetch, but only if no newer
    /// keystroke superseded this ticket.
    pub fn take_due_search(&self, ticket: u64) -> Option<String> {
        (ticket == self.search_generation).then(|| self.search_query.clone())
    }

    // --- rows -------------------------------------------------------------

    /// Replaces the full row set (fetch result) and re-clamps the page,
    /// so a shrunken result can never leave the view beyond the last page.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.is_loaded = true;
        self.clamp_page();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// In-place update of the single matching row; used after a status
    /// toggle so no refetch is needed.
    pub fn patch_row(&mut self, id: RecordId, patch: impl FnOnce(&mut R)) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) {
            patch(row);
        }
    }

    // --- pagination -------------------------------------------------------

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    /// The visible slice of the current page.
    pub fn page_rows(&self) -> &[R] {
        let start = ((self.page - 1) * PAGE_SIZE).min(self.rows.len());
        let end = (start + PAGE_SIZE).min(self.rows.len());
        &self.rows[start..end]
    }

    // --- delete staging ---------------------------------------------------

    pub fn request_delete(&mut self, row: R) {
        self.pending_delete = Some(row);
    }

    pub fn pending_delete(&self) -> Option<&R> {
        self.pending_delete.as_ref()
    }

    /// Closes the confirmation without touching anything else. Also used
    /// to drop the staging after a completed delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // --- flags ------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn set_deleting(&mut self, deleting: bool) {
        self.is_deleting = deleting;
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }
}

pub fn create_state<R: ListRow>() -> RwSignal<ListController<R>> {
    RwSignal::new(ListController::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRow {
        id: RecordId,
        active: bool,
    }

    impl ListRow for TestRow {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn rows(n: usize) -> Vec<TestRow> {
        (1..=n as i64)
            .map(|i| TestRow {
                id: RecordId(i),
                active: true,
            })
            .collect()
    }

    #[test]
    fn test_twenty_three_rows_make_three_pages() {
        let mut list = ListController::new();
        list.set_rows(rows(23));

        assert_eq!(list.total_pages(), 3);
        assert_eq!(list.page_rows().len(), PAGE_SIZE);

        list.set_page(3);
        assert_eq!(list.page_rows().len(), 3);
        assert_eq!(list.page_rows()[0].id, RecordId(21));
    }

    #[test]
    fn test_empty_list_has_zero_pages_but_stays_on_page_one() {
        let mut list: ListController<TestRow> = ListController::new();
        list.set_rows(Vec::new());
        assert_eq!(list.total_pages(), 0);
        assert_eq!(list.page(), 1);
        assert!(list.page_rows().is_empty());
    }

    #[test]
    fn test_set_page_clamps_both_ends() {
        let mut list = ListController::new();
        list.set_rows(rows(23));

        list.set_page(0);
        assert_eq!(list.page(), 1);
        list.set_page(99);
        assert_eq!(list.page(), 3);
    }

    #[test]
    fn test_shrinking_rows_pulls_the_page_back() {
        let mut list = ListController::new();
        list.set_rows(rows(23));
        list.set_page(3);

        // refetch after a delete leaves 20 rows and only 2 pages
        list.set_rows(rows(20));
        assert_eq!(list.page(), 2);
        assert_eq!(list.page_rows().len(), PAGE_SIZE);
    }

    #[test]
    fn test_search_resets_page_synchronously() {
        let mut list = ListController::new();
        list.set_rows(rows(23));
        list.set_page(3);

        list.set_search("bio");
        assert_eq!(list.page(), 1);
        assert_eq!(list.search_query(), "bio");
    }

    #[test]
    fn test_keystroke_burst_leaves_one_due_search() {
        let mut list: ListController<TestRow> = ListController::new();
        let t1 = list.set_search("b");
        let t2 = list.set_search("bi");
        let t3 = list.set_search("bio");

        assert_eq!(list.take_due_search(t1), None);
        assert_eq!(list.take_due_search(t2), None);
        assert_eq!(list.take_due_search(t3), Some("bio".to_string()));
    }

    #[test]
    fn test_patch_row_touches_only_the_target() {
        let mut list = ListController::new();
        list.set_rows(rows(3));

        list.patch_row(RecordId(2), |row| row.active = false);
        assert!(list.rows()[0].active);
        assert!(!list.rows()[1].active);
        assert!(list.rows()[2].active);
    }

    #[test]
    fn test_patch_row_with_unknown_id_changes_nothing() {
        let mut list = ListController::new();
        list.set_rows(rows(3));
        let before = list.rows().to_vec();

        list.patch_row(RecordId(42), |row| row.active = false);
        assert_eq!(list.rows(), &before[..]);
    }

    #[test]
    fn test_delete_staging_and_cancel() {
        let mut list = ListController::new();
        list.set_rows(rows(5));

        let target = list.rows()[1].clone();
        list.request_delete(target.clone());
        assert_eq!(list.pending_delete(), Some(&target));

        list.cancel_delete();
        assert_eq!(list.pending_delete(), None);
        assert_eq!(list.row_count(), 5);
    }

    #[test]
    fn test_loaded_flag_flips_on_first_rows() {
        let mut list: ListController<TestRow> = ListController::new();
        assert!(!list.is_loaded());
        list.set_rows(Vec::new());
        assert!(list.is_loaded());
    }
}
