//! Application state container shared across Axum route handlers.
//!
//! Holds the class data store. It is cheap to clone and passed into route
//! handlers via Axum's `State<T>` extractor.

use crate::store::ClassStore;

/// Central application state shared across the server.
#[derive(Clone, Default)]
pub struct AppState {
    store: ClassStore,
}

impl AppState {
    /// Creates a new `AppState` with an empty class store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared reference to the class store.
    pub fn store(&self) -> &ClassStore {
        &self.store
    }

    /// Returns a cloned handle to the class store.
    ///
    /// Useful for spawned tasks that require ownership.
    pub fn store_clone(&self) -> ClassStore {
        self.store.clone()
    }
}
