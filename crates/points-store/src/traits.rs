//! Store contract for receipts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use points_core::Receipt;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// A receipt together with the identifier it was stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReceipt {
    /// Store-generated identifier (UUID v4, hyphenated).
    pub id: String,

    /// The receipt exactly as submitted.
    pub receipt: Receipt,

    /// When the store accepted the receipt.
    pub received_at: DateTime<Utc>,
}

/// Identifier-keyed receipt storage.
///
/// Entries are written once by [`put`](ReceiptStore::put) and never
/// updated or removed.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under a freshly generated identifier and returns it.
    async fn put(&self, receipt: Receipt) -> StoreResult<String>;

    /// Looks up a receipt by identifier.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// nothing is stored under `id`.
    async fn get(&self, id: &str) -> StoreResult<StoredReceipt>;

    /// Number of stored receipts.
    async fn len(&self) -> usize;

    /// Returns true if no receipt has been stored.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
