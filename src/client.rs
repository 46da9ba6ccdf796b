//! Main Financial Modeling Prep API client
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::PriceMap;
use crate::request::Request;
use crate::rest;

/// The main Financial Modeling Prep API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct FinancialModelingPrep<Client: Request = reqwest::Client> {
    client: Client,
    config: Config,
}

/// The main Financial Modeling Prep API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Debug, Clone)]
pub struct FinancialModelingPrep<Client: Request = crate::request::HyperClient> {
    client: Client,
    config: Config,
}

/// The main Financial Modeling Prep API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Debug, Clone)]
pub struct FinancialModelingPrep<Client: Request> {
    client: Client,
    config: Config,
}

impl<Client: Request> FinancialModelingPrep<Client> {
    /// Create a new client from the environment using the default HTTP client.
    ///
    /// This method is only available when the `dotenvy` feature is enabled.
    /// See [`Config::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if `FMP_API_KEY` is missing.
    #[cfg(feature = "dotenvy")]
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            config: Config::from_env()?,
        })
    }

    #[cfg(not(feature = "dotenvy"))]
    /// Create a new client with the default HTTP client and no API key.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            config: Config::default(),
        }
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the API key appended to every request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fmprep::FinancialModelingPrep;
    ///
    /// let client = FinancialModelingPrep::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another API root, e.g. a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }

    /// Get the API root for this instance.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Build a full request URL from an endpoint path and query parameters.
    ///
    /// The API key, when set, always goes last.
    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let mut params = query.to_vec();
        if let Some(key) = self.api_key() {
            params.push(("apikey", key));
        }

        let mut url = format!("{}/{}", self.base_url().trim_end_matches('/'), path);
        if !params.is_empty() {
            let encoded = serde_urlencoded::to_string(&params)
                .map_err(|e| Error::InvalidArgument(format!("cannot encode query: {e}")))?;
            url.push('?');
            url.push_str(&encoded);
        }
        Ok(url)
    }

    /// Fetch the enterprise value statement, including shares outstanding.
    ///
    /// `period` must be `"annual"` or `"quarter"`.
    pub async fn ev_statement(&self, ticker: &str, period: &str) -> Result<Value> {
        rest::fundamentals::enterprise_value(self, ticker)
            .period(period)
            .get()
            .await
    }

    /// Fetch the income statement.
    ///
    /// `period` must be `"annual"` or `"quarter"`.
    pub async fn income_statement(&self, ticker: &str, period: &str) -> Result<Value> {
        rest::fundamentals::income_statement(self, ticker)
            .period(period)
            .get()
            .await
    }

    /// Fetch the cash flow statement.
    ///
    /// `period` must be `"annual"` or `"quarter"`.
    pub async fn cashflow_statement(&self, ticker: &str, period: &str) -> Result<Value> {
        rest::fundamentals::cash_flow_statement(self, ticker)
            .period(period)
            .get()
            .await
    }

    /// Fetch the balance sheet statement.
    ///
    /// `period` must be `"annual"` or `"quarter"`.
    pub async fn balance_statement(&self, ticker: &str, period: &str) -> Result<Value> {
        rest::fundamentals::balance_sheet_statement(self, ticker)
            .period(period)
            .get()
            .await
    }

    /// Fetch the real-time price of a ticker, `{"symbol": .., "price": ..}`.
    pub async fn stock_price(&self, ticker: &str) -> Result<Value> {
        rest::prices::real_time_price(self, ticker).get().await
    }

    /// Fetch the real-time price of every ticker. See [`rest::share_prices::batch_stock_prices`].
    pub async fn batch_stock_prices<S: AsRef<str>>(&self, tickers: &[S]) -> Result<PriceMap> {
        rest::share_prices::batch_stock_prices(self, tickers).await
    }

    /// Fetch the close near each date. See [`rest::share_prices::historical_share_prices`].
    pub async fn historical_share_prices<S: AsRef<str>>(
        &self,
        ticker: &str,
        dates: &[S],
    ) -> Result<PriceMap> {
        rest::share_prices::historical_share_prices(self, ticker, dates).await
    }
}

impl<Client: Request> Default for FinancialModelingPrep<Client> {
    /// Create a client with the default HTTP client, the v3 API root and no API key.
    fn default() -> Self {
        Self {
            client: Client::new(),
            config: Config::default(),
        }
    }
}
