//! Stock price endpoints returning parsed JSON

use crate::client::FinancialModelingPrep;
use crate::processor::Json;
use crate::request::Request;
use crate::request::prices::{HistoricalPriceFull, RealTimePrice};

/// Get the real-time price for a stock
///
/// # Example
/// ```no_run
/// # use fmprep::FinancialModelingPrep;
/// # use fmprep::models::StockPrice;
/// # async fn example() {
/// # let client = FinancialModelingPrep::default();
/// let quote: StockPrice = fmprep::rest::prices::real_time_price(&client, "AAPL")
///     .typed::<StockPrice>()
///     .get()
///     .await
///     .unwrap();
/// println!("{} {}", quote.symbol, quote.price);
/// # }
/// ```
pub fn real_time_price<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    symbol: impl Into<String>,
) -> RealTimePrice<'a, Client, Json> {
    RealTimePrice::new(client, symbol)
}

/// Get the daily price history for a stock, optionally bounded with `.from()` and `.to()`
pub fn historical_price_full<'a, Client: Request>(
    client: &'a FinancialModelingPrep<Client>,
    symbol: impl Into<String>,
) -> HistoricalPriceFull<'a, Client, Json> {
    HistoricalPriceFull::new(client, symbol)
}
