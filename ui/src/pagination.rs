//! Pagination and sort-state bookkeeping, decoupled from any specific
//! dataset-fetching mechanism.
//!
//! [`Paginator`] owns the current page, page size, and sort column for a
//! dataset whose total size is supplied externally and may change between
//! renders (e.g. after a filter narrows the result set). The user-chosen
//! subset of the state is written through to a [`StateStore`] on every
//! change, keyed by the caller's storage key, so preferences survive
//! reloads and outlive any one component instance.
//!
//! Every operation is a total function: out-of-range input is clamped,
//! never rejected. Pagination controls must not be able to crash a list
//! view.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::storage::StateStore;

/// The subset of pagination state that is persisted. The page count is
/// always re-derived from the live total, never stored.
#[derive(Serialize, Deserialize)]
struct PersistedPagination {
    page: usize,
    page_size: usize,
    sort_by: Option<String>,
    descending: bool,
}

/// A render-friendly copy of the current pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSnapshot {
    pub page: usize,
    pub page_size: usize,
    pub sort_by: Option<String>,
    pub descending: bool,
    pub total_pages: usize,
}

pub struct Paginator {
    store: Rc<dyn StateStore>,
    storage_key: String,
    page: usize,
    page_size: usize,
    sort_by: Option<String>,
    descending: bool,
    total_items: usize,
}

impl Paginator {
    /// Create a paginator keyed by `storage_key`, restoring any state a
    /// previous instance persisted under the same key.
    pub fn new(
        store: Rc<dyn StateStore>,
        storage_key: &str,
        total_items: usize,
        default_page_size: usize,
    ) -> Self {
        let persisted = store
            .read(storage_key)
            .and_then(|raw| {
                serde_json::from_str::<PersistedPagination>(&raw).ok()
            })
            .filter(|persisted| persisted.page_size > 0);

        let mut paginator = match persisted {
            Some(persisted) => Self {
                store,
                storage_key: storage_key.to_string(),
                page: persisted.page.max(1),
                page_size: persisted.page_size,
                sort_by: persisted.sort_by,
                descending: persisted.descending,
                total_items,
            },
            None => Self {
                store,
                storage_key: storage_key.to_string(),
                page: 1,
                page_size: default_page_size.max(1),
                sort_by: None,
                descending: false,
                total_items,
            },
        };

        // The dataset may have shrunk since the page was persisted.
        paginator.page = paginator.page.min(paginator.total_pages());
        paginator
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn descending(&self) -> bool {
        self.descending
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// 0-indexed offset of the first item on the current page, for
    /// offset/limit-shaped list endpoints.
    pub fn offset(&self) -> i64 {
        ((self.page - 1) * self.page_size) as i64
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    pub fn snapshot(&self) -> PaginationSnapshot {
        PaginationSnapshot {
            page: self.page,
            page_size: self.page_size,
            sort_by: self.sort_by.clone(),
            descending: self.descending,
            total_pages: self.total_pages(),
        }
    }

    /// Go to `page`, clamped into `1..=total_pages`. Setting the current
    /// page again is a no-op, including the persistence write.
    pub fn set_page(&mut self, page: usize) {
        let page = page.clamp(1, self.total_pages());
        if page == self.page {
            return;
        }
        self.page = page;
        self.persist();
    }

    /// Change the page size, keeping the first item of the old page
    /// visible on the recomputed page. A zero size is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 || page_size == self.page_size {
            return;
        }
        let first_item = (self.page - 1) * self.page_size;
        self.page_size = page_size;
        self.page = (first_item / page_size + 1).min(self.total_pages());
        self.persist();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.total_pages());
    }

    /// Sort by `column`: repeated calls on the same column toggle the
    /// direction, a new column starts ascending. The toggle is computed
    /// once and the one result written to both the live state and the
    /// store, so the two can't diverge.
    pub fn sort(&mut self, column: &str) {
        self.descending = match &self.sort_by {
            Some(current) if current == column => !self.descending,
            _ => false,
        };
        self.sort_by = Some(column.to_string());
        self.persist();
    }

    /// Passive invariant restoration: called whenever the externally
    /// supplied total changes, so the current page never points past the
    /// end of the dataset.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let clamped = self.page.min(self.total_pages());
        if clamped != self.page {
            self.page = clamped;
            self.persist();
        }
    }

    fn persist(&self) {
        let persisted = PersistedPagination {
            page: self.page,
            page_size: self.page_size,
            sort_by: self.sort_by.clone(),
            descending: self.descending,
        };
        if let Ok(raw) = serde_json::to_string(&persisted) {
            self.store.write(&self.storage_key, &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn paginator(total_items: usize, page_size: usize) -> Paginator {
        Paginator::new(
            Rc::new(MemoryStore::new()),
            "test.list",
            total_items,
            page_size,
        )
    }

    #[test]
    fn total_pages_rounds_up_and_is_at_least_one() {
        assert_eq!(paginator(0, 10).total_pages(), 1);
        assert_eq!(paginator(1, 10).total_pages(), 1);
        assert_eq!(paginator(10, 10).total_pages(), 1);
        assert_eq!(paginator(11, 10).total_pages(), 2);
        assert_eq!(paginator(95, 10).total_pages(), 10);
    }

    #[test]
    fn set_page_clamps_out_of_range_input() {
        let mut pager = paginator(50, 10);
        pager.set_page(3);
        assert_eq!(pager.page(), 3);
        pager.set_page(99);
        assert_eq!(pager.page(), 5);
        pager.set_page(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn setting_the_current_page_does_not_touch_the_store() {
        let store = MemoryStore::new();
        let mut pager =
            Paginator::new(Rc::new(store.clone()), "test.list", 50, 10);
        pager.set_page(2);
        let persisted = store.read("test.list");
        assert!(persisted.is_some());

        store.write("test.list", "sentinel");
        pager.set_page(2);
        assert_eq!(store.read("test.list"), Some("sentinel".to_string()));
    }

    #[test]
    fn prev_and_next_saturate_at_the_boundaries() {
        let mut pager = paginator(30, 10);
        pager.prev_page();
        assert_eq!(pager.page(), 1);

        pager.next_page();
        pager.next_page();
        assert_eq!(pager.page(), 3);
        pager.next_page();
        assert_eq!(pager.page(), 3);

        pager.first_page();
        assert_eq!(pager.page(), 1);
        pager.last_page();
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn page_size_change_keeps_the_first_visible_item() {
        // Page 3 at size 10: first visible item index is 20. At size 20
        // that item lives on page 2.
        let mut pager = paginator(100, 10);
        pager.set_page(3);
        pager.set_page_size(20);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.offset(), 20);

        // Shrinking the page size walks the other way: item 20 at size 5
        // is on page 5.
        pager.set_page_size(5);
        assert_eq!(pager.page(), 5);
        assert_eq!(pager.offset(), 20);
    }

    #[test]
    fn page_size_change_clamps_into_the_new_range() {
        let mut pager = paginator(12, 1);
        pager.set_page(12);
        pager.set_page_size(10);
        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn zero_page_size_is_ignored() {
        let mut pager = paginator(50, 10);
        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 10);
    }

    #[test]
    fn sort_toggles_on_the_same_column_and_resets_on_a_new_one() {
        let mut pager = paginator(50, 10);
        assert_eq!(pager.sort_by(), None);

        pager.sort("name");
        assert_eq!(pager.sort_by(), Some("name"));
        assert!(!pager.descending());

        pager.sort("name");
        assert!(pager.descending());

        pager.sort("created_at");
        assert_eq!(pager.sort_by(), Some("created_at"));
        assert!(!pager.descending());
    }

    #[test]
    fn state_round_trips_through_the_store() {
        let store = MemoryStore::new();
        {
            let mut pager =
                Paginator::new(Rc::new(store.clone()), "test.list", 50, 10);
            pager.set_page(3);
            pager.sort("name");
            pager.sort("name");
        }

        let pager = Paginator::new(Rc::new(store), "test.list", 50, 25);
        assert_eq!(pager.page(), 3);
        // Persisted page size wins over the default.
        assert_eq!(pager.page_size(), 10);
        assert_eq!(pager.sort_by(), Some("name"));
        assert!(pager.descending());
    }

    #[test]
    fn distinct_keys_do_not_interfere() {
        let store = MemoryStore::new();
        let mut members =
            Paginator::new(Rc::new(store.clone()), "members", 50, 10);
        members.set_page(4);

        let transactions =
            Paginator::new(Rc::new(store), "transactions", 50, 10);
        assert_eq!(transactions.page(), 1);
    }

    #[test]
    fn garbage_in_the_store_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.write("test.list", "not json");
        let pager = Paginator::new(Rc::new(store), "test.list", 50, 10);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 10);
    }

    #[test]
    fn restored_page_is_clamped_to_the_current_total() {
        let store = MemoryStore::new();
        {
            let mut pager =
                Paginator::new(Rc::new(store.clone()), "test.list", 100, 10);
            pager.set_page(9);
        }
        // The dataset shrank between sessions.
        let pager = Paginator::new(Rc::new(store), "test.list", 25, 10);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn shrinking_total_clamps_the_page_down() {
        let mut pager = paginator(100, 10);
        pager.set_page(10);

        pager.set_total_items(35);
        assert_eq!(pager.total_pages(), 4);
        assert_eq!(pager.page(), 4);

        pager.set_total_items(0);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn growing_total_leaves_the_page_alone() {
        let mut pager = paginator(30, 10);
        pager.set_page(2);
        pager.set_total_items(300);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.total_pages(), 30);
    }

    #[test]
    fn offset_and_limit_match_the_current_slice() {
        let mut pager = paginator(100, 25);
        assert_eq!(pager.offset(), 0);
        assert_eq!(pager.limit(), 25);
        pager.set_page(3);
        assert_eq!(pager.offset(), 50);
    }
}
