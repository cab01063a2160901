use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::store::{KeyValueStore, Namespaced};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend selected by `STORE_BACKEND`. Handlers go through `namespace`.
    pub store: Arc<dyn KeyValueStore>,
    #[allow(dead_code)]
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// The caller's slice of the store. Each user id behaves like its own browser profile.
    pub fn namespace(&self, user_id: Uuid) -> Namespaced {
        Namespaced::for_user(self.store.clone(), user_id)
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(crate::store::MemoryStore::new()),
            Config::in_memory(),
        )
    }
}
