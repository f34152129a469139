//! stockd-core
//!
//! Domain types and the read-only stock catalog shared by the stockd service.
//!
//! - `types`: the `Stock` record served to clients.
//! - `catalog`: the fixed in-memory symbol → `Stock` mapping and its lookup rules.
//! - `error`: the unified `StockdError` type.
//!
//! The catalog is populated once at process start and never mutated afterwards,
//! so it can be shared across request handlers without synchronization.
#![warn(missing_docs)]

/// Fixed in-memory catalog keyed by uppercase ticker symbol.
pub mod catalog;
/// Unified error type for the stockd workspace.
pub mod error;
/// Serializable domain records.
pub mod types;

pub use catalog::StockCatalog;
pub use error::StockdError;
pub use types::Stock;
