//! Typed views over the price endpoints
//!
//! Statement endpoints are returned as untyped JSON; only the fields the
//! price helpers read are modelled here. Unknown fields are kept in `extra`.
use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Map from a ticker or a date string to a price, in insertion order
pub type PriceMap = IndexMap<String, f64>;

/// Body of `stock/real-time-price/{ticker}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPrice {
    /// Ticker symbol
    #[serde(default)]
    pub symbol: String,
    /// Last traded price
    pub price: f64,
    /// Any other fields in the body
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Body of `historical-price-full/{ticker}`
///
/// An empty range comes back as `"historical": []`. A body without the
/// `historical` member does not decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalPrices {
    /// Ticker symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Trading days in range, most recent first
    pub historical: Vec<HistoricalBar>,
}

/// One trading day in a historical price series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// Trading day, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    /// Closing price
    pub close: f64,
    /// Open, high, low, volume and the rest
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl HistoricalPrices {
    /// Close of the first bar, which is the most recent day in range
    pub fn first_close(&self) -> Option<f64> {
        self.historical.first().map(|bar| bar.close)
    }
}
