use std::sync::Arc;

use roster_core::store::CharacterStore;
use tokio::sync::RwLock;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The character collection. Every read or mutation goes through this lock.
    pub store: Arc<RwLock<CharacterStore>>,
}

impl AppState {
    pub fn new(store: CharacterStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
