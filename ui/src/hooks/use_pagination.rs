use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::pagination::{PaginationSnapshot, Paginator};
use crate::storage::StateStore;

/// Pagination hook return type: the current state plus navigation
/// callbacks for wiring into pagination controls.
#[derive(Clone)]
pub struct PaginationHandle {
    snapshot: PaginationSnapshot,
    pub set_page: Callback<usize>,
    pub set_page_size: Callback<usize>,
    pub next_page: Callback<()>,
    pub prev_page: Callback<()>,
    pub first_page: Callback<()>,
    pub last_page: Callback<()>,
    pub sort: Callback<String>,
}

impl PaginationHandle {
    pub fn page(&self) -> usize {
        self.snapshot.page
    }

    pub fn page_size(&self) -> usize {
        self.snapshot.page_size
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.snapshot.sort_by.as_deref()
    }

    pub fn descending(&self) -> bool {
        self.snapshot.descending
    }

    pub fn total_pages(&self) -> usize {
        self.snapshot.total_pages
    }

    pub fn is_first_page(&self) -> bool {
        self.snapshot.page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.snapshot.page == self.snapshot.total_pages
    }

    /// 0-indexed offset of the first item on the current page, for
    /// offset/limit-shaped list endpoints.
    pub fn offset(&self) -> i64 {
        ((self.snapshot.page - 1) * self.snapshot.page_size) as i64
    }

    pub fn limit(&self) -> i64 {
        self.snapshot.page_size as i64
    }
}

/// Hook owning persisted pagination and sort state for a dataset of
/// `total_items` items.
///
/// State is keyed by `storage_key` and survives unmounts: a new instance
/// with the same key picks up where the last one left off. When
/// `total_items` changes (say, a filter narrowed the result set), the
/// current page is clamped back into range automatically.
#[hook]
pub fn use_pagination(
    storage_key: &str,
    total_items: usize,
    default_page_size: usize,
) -> PaginationHandle {
    use_pagination_with_store(
        default_store(),
        storage_key,
        total_items,
        default_page_size,
    )
}

/// [`use_pagination`] with an explicit storage backing.
#[hook]
pub fn use_pagination_with_store(
    store: Rc<dyn StateStore>,
    storage_key: &str,
    total_items: usize,
    default_page_size: usize,
) -> PaginationHandle {
    let pager = use_mut_ref(|| {
        Paginator::new(store, storage_key, total_items, default_page_size)
    });
    let snapshot = use_state(|| pager.borrow().snapshot());

    // Clamp the page whenever the externally supplied total changes.
    {
        let pager = pager.clone();
        let snapshot = snapshot.clone();
        use_effect_with(total_items, move |total| {
            pager.borrow_mut().set_total_items(*total);
            snapshot.set(pager.borrow().snapshot());
        });
    }

    let set_page =
        mutate(&pager, &snapshot, |pager, page| pager.set_page(page));
    let set_page_size =
        mutate(&pager, &snapshot, |pager, size| pager.set_page_size(size));
    let next_page = mutate(&pager, &snapshot, |pager, ()| pager.next_page());
    let prev_page = mutate(&pager, &snapshot, |pager, ()| pager.prev_page());
    let first_page =
        mutate(&pager, &snapshot, |pager, ()| pager.first_page());
    let last_page = mutate(&pager, &snapshot, |pager, ()| pager.last_page());
    let sort = mutate(&pager, &snapshot, |pager, column: String| {
        pager.sort(&column)
    });

    PaginationHandle {
        snapshot: (*snapshot).clone(),
        set_page,
        set_page_size,
        next_page,
        prev_page,
        first_page,
        last_page,
        sort,
    }
}

/// Build a callback that applies a mutation to the paginator (which
/// writes through to the store) and publishes a fresh snapshot for
/// rendering.
fn mutate<A: 'static>(
    pager: &Rc<RefCell<Paginator>>,
    snapshot: &UseStateHandle<PaginationSnapshot>,
    apply: impl Fn(&mut Paginator, A) + 'static,
) -> Callback<A> {
    let pager = pager.clone();
    let snapshot = snapshot.clone();
    Callback::from(move |arg| {
        apply(&mut pager.borrow_mut(), arg);
        snapshot.set(pager.borrow().snapshot());
    })
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Rc<dyn StateStore> {
    Rc::new(crate::storage::LocalStorageStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Rc<dyn StateStore> {
    Rc::new(crate::storage::MemoryStore::new())
}
