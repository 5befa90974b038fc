//! # Domain Types
//!
//! The receipt as it arrives over the wire.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │        Receipt           │ 1    * │          Item            │      │
//! │  │  ──────────────────────  │───────►│  ──────────────────────  │      │
//! │  │  retailer                │        │  shortDescription        │      │
//! │  │  purchaseDate (Y-M-D)    │        │  price (decimal string)  │      │
//! │  │  purchaseTime (HH:MM)    │        └──────────────────────────┘      │
//! │  │  total (decimal string)  │                                          │
//! │  └──────────────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Strings?
//! Every field is kept exactly as submitted. Parsing happens per rule in
//! [`crate::points`], so one malformed field only affects the rule that
//! reads it.

use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description printed on the receipt.
    pub short_description: String,

    /// Price as a decimal string, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    /// Creates an item from its description and price.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Items keep their submitted order. `Default` is the all-empty receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, `HH:MM` on a 24-hour clock.
    pub purchase_time: String,

    /// Purchased items.
    pub items: Vec<Item>,

    /// Total amount paid as a decimal string.
    pub total: String,
}

impl Receipt {
    /// Number of items on the receipt.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
