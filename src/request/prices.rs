//! Stock price request builders
use serde::de::DeserializeOwned;

use crate::client::FinancialModelingPrep;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw, Typed};
use crate::request::Request;

/// Real-time price request builder
pub struct RealTimePrice<'a, Client: Request, P: Processor = Json> {
    client: &'a FinancialModelingPrep<Client>,
    /// Stock symbol
    pub symbol: String,
    processor: P,
}

impl<'a, C: Request> RealTimePrice<'a, C, Json> {
    /// Create new real-time price request (returns parsed JSON by default)
    pub fn new(client: &'a FinancialModelingPrep<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            processor: Json,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> RealTimePrice<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// The URL this request will fetch
    pub fn url(&self) -> Result<String> {
        self.client
            .url(&format!("stock/real-time-price/{}", self.symbol), &[])
    }

    /// Process the response with another processor
    pub fn with_processor<Q: Processor>(self, processor: Q) -> RealTimePrice<'a, C, Q> {
        RealTimePrice {
            client: self.client,
            symbol: self.symbol,
            processor,
        }
    }

    /// Return the body as a string
    pub fn raw(self) -> RealTimePrice<'a, C, Raw> {
        self.with_processor(Raw)
    }

    /// Deserialize the body into `T`, e.g. [`StockPrice`](crate::models::StockPrice)
    pub fn typed<T: DeserializeOwned>(self) -> RealTimePrice<'a, C, Typed<T>> {
        self.with_processor(Typed::new())
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for RealTimePrice<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}

/// Full daily price history request builder
pub struct HistoricalPriceFull<'a, Client: Request, P: Processor = Json> {
    client: &'a FinancialModelingPrep<Client>,
    /// Stock symbol
    pub symbol: String,
    /// First day of the range, sent verbatim
    pub from: Option<String>,
    /// Last day of the range, sent verbatim
    pub to: Option<String>,
    processor: P,
}

impl<'a, C: Request> HistoricalPriceFull<'a, C, Json> {
    /// Create new price history request (returns parsed JSON by default)
    pub fn new(client: &'a FinancialModelingPrep<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            from: None,
            to: None,
            processor: Json,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> HistoricalPriceFull<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set the first day of the range
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the last day of the range
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// The URL this request will fetch
    pub fn url(&self) -> Result<String> {
        let mut query = Vec::new();
        if let Some(from) = &self.from {
            query.push(("from", from.as_str()));
        }
        if let Some(to) = &self.to {
            query.push(("to", to.as_str()));
        }
        self.client
            .url(&format!("historical-price-full/{}", self.symbol), &query)
    }

    /// Process the response with another processor
    pub fn with_processor<Q: Processor>(self, processor: Q) -> HistoricalPriceFull<'a, C, Q> {
        HistoricalPriceFull {
            client: self.client,
            symbol: self.symbol,
            from: self.from,
            to: self.to,
            processor,
        }
    }

    /// Return the body as a string
    pub fn raw(self) -> HistoricalPriceFull<'a, C, Raw> {
        self.with_processor(Raw)
    }

    /// Deserialize the body into `T`, e.g. [`HistoricalPrices`](crate::models::HistoricalPrices)
    pub fn typed<T: DeserializeOwned>(self) -> HistoricalPriceFull<'a, C, Typed<T>> {
        self.with_processor(Typed::new())
    }

    /// Return the price history as a DataFrame
    #[cfg(feature = "table")]
    pub fn table(self) -> HistoricalPriceFull<'a, C, crate::processor::Table> {
        self.with_processor(crate::processor::Table)
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for HistoricalPriceFull<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.url()?;
        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}
