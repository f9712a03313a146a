//! Admin backend for an e-commerce catalog.
//!
//! Manages categories, products, inventory levels and sales records, and
//! exposes aggregate revenue reporting over embedded SQLite.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── config.rs      # Environment configuration
//! ├── state.rs       # Shared state (SQLite pool)
//! ├── error.rs       # AppError + response envelope
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Query layer
//! ├── reporting.rs   # Revenue bucketing and period comparison
//! └── validation.rs  # Input validation helpers
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod reporting;
pub mod state;
pub mod util;
pub mod validation;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
