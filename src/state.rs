use std::sync::Arc;

use crate::store::ItemStore;

/// Shared application state
///
/// The store is injected rather than reached through a global, so handler
/// tests can swap in [`crate::store::MemoryStore`]. Cloned per request;
/// the store sits behind `Arc` so clones are cheap.
pub struct AppState<S: ItemStore> {
    pub store: Arc<S>,
}

impl<S: ItemStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: ItemStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
