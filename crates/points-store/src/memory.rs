//! # In-Memory Receipt Store
//!
//! The default [`ReceiptStore`]: a `HashMap` behind a tokio `RwLock`.
//! Contents live as long as the process.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put()  ── write lock ──► insert(id, StoredReceipt)                     │
//! │  get()  ── read lock  ──► clone StoredReceipt                           │
//! │  len()  ── read lock  ──► map.len()                                     │
//! │                                                                         │
//! │  Identifiers are generated before the lock is taken.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use points_core::Receipt;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ReceiptStore, StoredReceipt};

/// Receipt store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    receipts: RwLock<HashMap<String, StoredReceipt>>,
}

impl MemoryReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryReceiptStore::default()
    }
}

#[async_trait]
impl ReceiptStore for MemoryReceiptStore {
    async fn put(&self, receipt: Receipt) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        let stored = StoredReceipt {
            id: id.clone(),
            receipt,
            received_at: Utc::now(),
        };

        info!(
            id = %id,
            retailer = %stored.receipt.retailer,
            items = stored.receipt.item_count(),
            "Receipt stored"
        );

        self.receipts.write().await.insert(id.clone(), stored);
        Ok(id)
    }

    async fn get(&self, id: &str) -> StoreResult<StoredReceipt> {
        let receipts = self.receipts.read().await;
        match receipts.get(id) {
            Some(stored) => Ok(stored.clone()),
            None => {
                debug!(id = %id, "Receipt lookup missed");
                Err(StoreError::not_found(id))
            }
        }
    }

    async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
