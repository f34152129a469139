//! Fixed in-memory stock catalog.
//!
//! The catalog is a symbol → [`Stock`] mapping built once at startup and read for
//! the rest of the process lifetime. All keys are uppercase; [`StockCatalog::get`]
//! uppercases the requested symbol before matching, so lookups are
//! case-insensitive. A `BTreeMap` keeps JSON renderings of the full catalog in a
//! stable order.

use std::collections::BTreeMap;

use crate::error::StockdError;
use crate::types::Stock;

/// Read-only mapping from uppercase ticker symbol to [`Stock`].
#[derive(Debug, Clone)]
pub struct StockCatalog {
    stocks: BTreeMap<String, Stock>,
}

impl StockCatalog {
    /// Build a catalog from arbitrary records, keying each by its uppercased symbol.
    ///
    /// Later records win when two share a symbol.
    pub fn new(stocks: impl IntoIterator<Item = Stock>) -> Self {
        let stocks = stocks
            .into_iter()
            .map(|s| (s.symbol.to_uppercase(), s))
            .collect();
        Self { stocks }
    }

    /// The fixed dataset shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            Stock::new("AAPL", "Apple Inc.", 189.84),
            Stock::new("MSFT", "Microsoft Corp", 420.55),
            Stock::new("GOOGL", "Alphabet Inc. Class A", 151.12),
            Stock::new("AMZN", "Amazon.com Inc.", 178.15),
            Stock::new("TSLA", "Tesla Inc.", 177.48),
            Stock::new("NVDA", "NVIDIA Corp", 950.02),
        ])
    }

    /// Entire catalog keyed by symbol.
    #[must_use]
    pub fn all(&self) -> &BTreeMap<String, Stock> {
        &self.stocks
    }

    /// Look up a single symbol, case-insensitively.
    ///
    /// # Errors
    /// Returns `StockdError::NotFound` when the uppercased symbol is absent.
    pub fn get(&self, symbol: &str) -> Result<&Stock, StockdError> {
        let key = symbol.to_uppercase();
        self.stocks.get(&key).ok_or_else(|| {
            tracing::debug!(symbol = %key, "catalog miss");
            StockdError::not_found(key)
        })
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// `true` when the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

impl Default for StockCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
