use thiserror::Error;

/// Unified error type for the stockd workspace.
///
/// Covers the single client-visible failure (an unknown symbol) and startup-time
/// configuration problems. Self-ping network errors are contained at their origin
/// and never pass through this type.
#[derive(Debug, Error)]
pub enum StockdError {
    /// The requested symbol is not present in the catalog.
    #[error("not found: {symbol}")]
    NotFound {
        /// Uppercased symbol that missed the catalog.
        symbol: String,
    },

    /// Invalid environment configuration detected at startup.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StockdError {
    /// Helper: build a `NotFound` error for the given symbol.
    pub fn not_found(symbol: impl Into<String>) -> Self {
        Self::NotFound {
            symbol: symbol.into(),
        }
    }

    /// Helper: build a `Config` error from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
