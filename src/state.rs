//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::dao::game_store::GameStore;

/// Cheaply clonable handle to the shared application state.
pub type SharedState = Arc<AppState>;

/// Central application state sharing the storage handle across handlers.
///
/// Handlers never see a concrete backend; they only reach storage through
/// the [`GameStore`] trait object installed here at startup.
pub struct AppState {
    store: Arc<dyn GameStore>,
}

impl AppState {
    /// Wrap a storage backend into shared state.
    pub fn new(store: Arc<dyn GameStore>) -> SharedState {
        Arc::new(Self { store })
    }

    /// Handle to the persistence gateway.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        self.store.clone()
    }
}
