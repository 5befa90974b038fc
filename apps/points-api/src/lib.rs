//! # Receipt Points API
//!
//! HTTP front end for receipt submission and points lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points API Modules                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  router        │  │  handlers      │  │  state                     ││
//! │  │                │  │                │  │                            ││
//! │  │ • routes       │─►│ • process      │─►│ • Arc<dyn ReceiptStore>    ││
//! │  │                │  │ • points       │  │ • Arc<ApiConfig>           ││
//! │  │                │  │ • health       │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐                                │
//! │  │  config        │  │  error         │                                │
//! │  │                │  │                │                                │
//! │  │ • env vars     │  │ • ApiError     │                                │
//! │  │ • policy       │  │ • status map   │                                │
//! │  └────────────────┘  └────────────────┘                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `POINTS_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `POINTS_PORT` - Listen port (default: 4000)
//! - `POINTS_MISSING_RECEIPT` - `not_found` (default) or `score_empty`
//! - `RUST_LOG` - tracing filter

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

// Re-exports
pub use config::{ApiConfig, ConfigError, MissingReceiptPolicy};
pub use error::{ApiError, ErrorCode};
pub use router::create_router;
pub use state::AppState;
