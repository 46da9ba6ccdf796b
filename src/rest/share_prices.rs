//! Price helpers built on the single-ticker endpoints

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::FinancialModelingPrep;
use crate::error::{Error, Result};
use crate::models::{HistoricalPrices, PriceMap, StockPrice};
use crate::request::Request;
use crate::rest::prices::{historical_price_full, real_time_price};

/// Fetch the real-time price of each ticker, one request per ticker, in order.
///
/// Duplicates are fetched again and the later price wins.
///
/// # Errors
///
/// Fails with the first error encountered; no partial map is returned.
pub async fn batch_stock_prices<C: Request, S: AsRef<str>>(
    client: &FinancialModelingPrep<C>,
    tickers: &[S],
) -> Result<PriceMap> {
    let mut prices = PriceMap::with_capacity(tickers.len());
    for ticker in tickers {
        let ticker = ticker.as_ref();
        let quote: StockPrice = real_time_price(client, ticker)
            .typed::<StockPrice>()
            .get()
            .await?;
        prices.insert(ticker.to_string(), quote.price);
    }
    Ok(prices)
}

/// Compute the `(from, to)` range used to look up the close near `date`.
///
/// `to` is the date itself. `from` is the date with 2 subtracted from its
/// trailing day digits as a plain integer, not as a calendar date: for
/// `YYYYMMDD` the trailing digit is used, so `"20200301"` gives `"2020030-1"`;
/// for `YYYY-MM-DD` the two day digits are used, so `"2020-03-01"` gives
/// `"2020-03--1"`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the date is too short to split, or its
/// day part is not an integer or too large to subtract from.
pub fn date_window(date: &str) -> Result<(String, String)> {
    let split = if date.contains('-') { 8 } else { 7 };
    let (prefix, day) = date
        .split_at_checked(split)
        .filter(|(_, day)| !day.is_empty())
        .ok_or_else(|| Error::InvalidArgument(format!("date {date:?} is too short")))?;
    let day: i64 = day
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("date {date:?} does not end in digits")))?;
    let start = day
        .checked_sub(2)
        .ok_or_else(|| Error::InvalidArgument(format!("date {date:?} is out of range")))?;
    Ok((format!("{prefix}{start}"), date.to_string()))
}

/// Where a historical lookup stands for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// First request, keyed by the requested date
    Primary,
    /// Same request again, keyed by the start of the range
    Fallback,
}

impl Attempt {
    fn key<'d>(self, from: &'d str, to: &'d str) -> &'d str {
        match self {
            Attempt::Primary => to,
            Attempt::Fallback => from,
        }
    }

    fn next(self) -> Option<Attempt> {
        match self {
            Attempt::Primary => Some(Attempt::Fallback),
            Attempt::Fallback => None,
        }
    }
}

/// Fetch the close on or shortly before each date.
///
/// For every date the range from [`date_window`] is requested and the first
/// bar's close is recorded under the date. If the range is empty the same
/// request is made once more and a hit is recorded under the start of the
/// range instead. If that is empty too, a warning with the date and the raw
/// response is logged and the date is left out.
///
/// Compact `YYYYMMDD` dates only move their last digit, so the fallback key for
/// `"20200101"` is `"2020010-1"`, not a calendar date.
///
/// # Errors
///
/// Malformed dates, transport failures and bodies without a `historical`
/// array are returned as errors; empty ranges never are.
pub async fn historical_share_prices<C: Request, S: AsRef<str>>(
    client: &FinancialModelingPrep<C>,
    ticker: &str,
    dates: &[S],
) -> Result<PriceMap> {
    let mut prices = PriceMap::new();
    for date in dates {
        let (from, to) = date_window(date.as_ref())?;

        let mut attempt = Some(Attempt::Primary);
        while let Some(current) = attempt {
            let body: Value = historical_price_full(client, ticker)
                .from(from.as_str())
                .to(to.as_str())
                .get()
                .await?;
            let series = HistoricalPrices::deserialize(&body)?;

            if let Some(close) = series.first_close() {
                let key = current.key(&from, &to);
                debug!(ticker, date = key, close, "historical close");
                prices.insert(key.to_string(), close);
                break;
            }

            attempt = current.next();
            if attempt.is_none() {
                warn!(ticker, date = %to, response = %body, "no historical close in range, skipping");
            }
        }
    }
    Ok(prices)
}
