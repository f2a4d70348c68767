//! Durable key-value storage seam for persisted UI state.
//!
//! Pagination state is written through a [`StateStore`] so the backing can
//! be browser local storage in the app and an in-memory map in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A durable string-keyed store. Writes are best-effort: a full or
/// unavailable store must never break the UI state that uses it.
pub trait StateStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory store. Clones share the same map, so a store handed to two
/// state managers behaves like the browser's shared local storage.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Browser local storage.
#[cfg(target_arch = "wasm32")]
#[derive(Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl StateStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        if let Ok(Some(storage)) = web_sys::window()?.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
        None
    }

    fn write(&self, key: &str, value: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::debug!(key, "local storage write failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_what_was_written() {
        let store = MemoryStore::new();
        assert_eq!(store.read("missing"), None);

        store.write("key", "first");
        assert_eq!(store.read("key"), Some("first".to_string()));

        store.write("key", "second");
        assert_eq!(store.read("key"), Some("second".to_string()));
    }

    #[test]
    fn clones_share_the_same_map() {
        let store = MemoryStore::new();
        let alias = store.clone();

        store.write("key", "value");
        assert_eq!(alias.read("key"), Some("value".to_string()));
    }
}
