//! Serializable domain records.

use serde::{Deserialize, Serialize};

/// Stock record served to clients.
///
/// The service treats everything beyond the symbol as an opaque payload; fields
/// exist only so the record round-trips through JSON unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Uppercase ticker symbol, also the catalog key.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Last known price.
    pub price: f64,
}

impl Stock {
    /// Construct a record, uppercasing the symbol.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            price,
        }
    }
}
