//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  └── CoreError::FieldParse  - a receipt field could not be parsed      │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError             - lookup misses, backend failures          │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError               - what the client sees                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `FieldParse` never leaves the scoring code: the rules recover from it by
//! substituting the field's zero value.

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A receipt field did not parse as the type a rule needs.
    ///
    /// ## When This Occurs
    /// - `total` or an item `price` is not a decimal number
    /// - `purchaseDate` is not `YYYY-MM-DD`
    /// - `purchaseTime` is not `HH:MM`
    #[error("{field} has invalid value '{value}': {reason}")]
    FieldParse {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl CoreError {
    /// Creates a FieldParse error.
    pub fn field_parse(
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        CoreError::FieldParse {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
