//! Financial statement request builder
//!
//! Enterprise value, income, cash flow and balance sheet statements share one
//! shape: a ticker in the path and an optional `period=quarter` query.
use crate::client::FinancialModelingPrep;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw};
use crate::request::Request;
use crate::request::common::{Period, StatementKind};

/// Financial statement request builder
pub struct Statement<'a, Client: Request, P: Processor = Json> {
    client: &'a FinancialModelingPrep<Client>,
    /// Which statement to fetch
    pub kind: StatementKind,
    /// Stock symbol
    pub symbol: String,
    /// Reporting period, `"annual"` or `"quarter"`; checked when the request runs
    pub period: String,
    processor: P,
}

// Constructor - always starts with Json
impl<'a, C: Request> Statement<'a, C, Json> {
    /// Create new statement request (annual, parsed JSON by default)
    pub fn new(
        client: &'a FinancialModelingPrep<C>,
        kind: StatementKind,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            client,
            kind,
            symbol: symbol.into(),
            period: Period::Annual.into(),
            processor: Json,
        }
    }
}

// Processor conversion and builder methods work on any processor type
impl<'a, C: Request, P: Processor + 'a> Statement<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set the reporting period
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// The URL this request will fetch
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the period is not
    /// `"annual"` or `"quarter"`.
    pub fn url(&self) -> Result<String> {
        let period: Period = self.period.parse()?;
        let path = format!("{}/{}", self.kind.path(), self.symbol);
        match period {
            Period::Annual => self.client.url(&path, &[]),
            Period::Quarter => self.client.url(&path, &[("period", Period::Quarter.as_str())]),
        }
    }

    /// Process the response with another processor
    pub fn with_processor<Q: Processor>(self, processor: Q) -> Statement<'a, C, Q> {
        Statement {
            client: self.client,
            kind: self.kind,
            symbol: self.symbol,
            period: self.period,
            processor,
        }
    }

    /// Return the body as a string
    pub fn raw(self) -> Statement<'a, C, Raw> {
        self.with_processor(Raw)
    }

    /// Return the statement records as a DataFrame
    #[cfg(feature = "table")]
    pub fn table(self) -> Statement<'a, C, crate::processor::Table> {
        self.with_processor(crate::processor::Table)
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Statement<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        // Period is validated here, before anything goes out on the wire
        let url = self.url()?;

        let response = self.client.client().get(&url).await;

        self.processor.process(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FinancialModelingPrep;
    use crate::error::Error;
    use crate::request::HttpResponse;

    struct Offline;

    impl Request for Offline {
        type Response = HttpResponse;

        fn new() -> Self {
            Offline
        }

        async fn get(&self, url: &str) -> Result<HttpResponse> {
            Err(Error::Transport(format!("offline: {url}")))
        }
    }

    fn client() -> FinancialModelingPrep<Offline> {
        FinancialModelingPrep::default()
    }

    #[test]
    fn annual_has_no_query() {
        let client = client();
        let request = Statement::new(&client, StatementKind::Income, "AAPL");
        assert_eq!(
            request.url().unwrap(),
            "https://financialmodelingprep.com/api/v3/financials/income-statement/AAPL"
        );
    }

    #[test]
    fn quarter_adds_period() {
        let client = client();
        let request = Statement::new(&client, StatementKind::EnterpriseValue, "MSFT").period("quarter");
        assert_eq!(
            request.url().unwrap(),
            "https://financialmodelingprep.com/api/v3/enterprise-value/MSFT?period=quarter"
        );
    }

    #[test]
    fn key_goes_after_period() {
        let client = client().with_key("demo");
        let request = Statement::new(&client, StatementKind::BalanceSheet, "IBM").period(Period::Quarter);
        assert_eq!(
            request.url().unwrap(),
            "https://financialmodelingprep.com/api/v3/financials/balance-sheet-statement/IBM?period=quarter&apikey=demo"
        );
    }

    #[test]
    fn bad_period_has_no_url() {
        let client = client();
        let request = Statement::new(&client, StatementKind::CashFlow, "IBM").period("monthly");
        assert!(matches!(request.url(), Err(Error::InvalidArgument(_))));
    }
}
