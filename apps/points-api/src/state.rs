//! Shared application state handed to every handler.

use std::sync::Arc;

use points_store::{MemoryReceiptStore, ReceiptStore};

use crate::config::ApiConfig;

/// Shared application state.
///
/// Cheap to clone: both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new(config: ApiConfig) -> Self {
        AppState::with_store(config, Arc::new(MemoryReceiptStore::new()))
    }

    /// State backed by the given store.
    pub fn with_store(config: ApiConfig, store: Arc<dyn ReceiptStore>) -> Self {
        AppState {
            store,
            config: Arc::new(config),
        }
    }
}
