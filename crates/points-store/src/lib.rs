//! # points-store: Receipt Storage for Receipt Points
//!
//! Keeps submitted receipts under store-generated identifiers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  POST /receipts/process          GET /receipt/{id}/points               │
//! │       │                               │                                 │
//! │       ▼ put(receipt) → id             ▼ get(id) → StoredReceipt         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  points-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐        ┌──────────────────────────────┐ │   │
//! │  │   │  ReceiptStore    │◄───────│  MemoryReceiptStore          │ │   │
//! │  │   │  (trait)         │ impl   │  RwLock<HashMap<id, ...>>    │ │   │
//! │  │   └──────────────────┘        └──────────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use points_store::{MemoryReceiptStore, ReceiptStore};
//!
//! let store = MemoryReceiptStore::new();
//!
//! // Store a receipt, get its identifier back
//! let id = store.put(receipt).await?;
//!
//! // Look it up again
//! let stored = store.get(&id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod traits;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemoryReceiptStore;
pub use traits::{ReceiptStore, StoredReceipt};
