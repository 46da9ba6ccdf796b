//! Response processors
//!
//! A processor turns the transport's response into the output of a request
//! builder. Every processor rejects non-2xx responses with
//! [`Error::ApiError`](crate::error::Error::ApiError) before looking at the body.
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::response::Response;

#[cfg(feature = "table")]
mod table;
#[cfg(feature = "table")]
pub use table::Table;

/// Converts a response into a request's output
pub trait Processor {
    /// The output type
    type Output;

    /// Process the transport result
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

fn ensure_success<R: Response>(resp: &R) -> Result<()> {
    if resp.is_success() {
        return Ok(());
    }
    Err(Error::ApiError {
        request_id: resp.request_id().to_owned(),
        status: resp.status(),
        message: resp.body().to_owned(),
    })
}

/// Returns the response body untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        let resp = response?;
        ensure_success(&resp)?;
        Ok(resp.body().to_owned())
    }
}

/// Parses the body into an untyped JSON value
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Processor for Json {
    type Output = serde_json::Value;

    fn process<R: Response>(&self, response: Result<R>) -> Result<serde_json::Value> {
        let resp = response?;
        ensure_success(&resp)?;
        Ok(serde_json::from_str(resp.body())?)
    }
}

/// Deserializes the body into `T`
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    /// Create a typed processor
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Processor for Typed<T> {
    type Output = T;

    fn process<R: Response>(&self, response: Result<R>) -> Result<T> {
        let resp = response?;
        ensure_success(&resp)?;
        Ok(serde_json::from_str(resp.body())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockPrice;
    use crate::request::HttpResponse;

    #[test]
    fn json_passes_body_through() {
        let value = Json
            .process(Ok(HttpResponse::ok(r#"[{"symbol":"AAPL","enterpriseValues":[]}]"#)))
            .unwrap();
        assert_eq!(value[0]["symbol"], "AAPL");
    }

    #[test]
    fn non_success_status_is_an_api_error() {
        let err = Json
            .process(Ok(HttpResponse::new(404, "not found")))
            .unwrap_err();
        match err {
            Error::ApiError { status, message, .. } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = Json.process(Ok(HttpResponse::ok("<html>"))).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn transport_errors_are_forwarded() {
        let err = Raw
            .process::<HttpResponse>(Err(Error::Transport("timed out".to_string())))
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn typed_decodes_stock_price() {
        let price = Typed::<StockPrice>::new()
            .process(Ok(HttpResponse::ok(r#"{"symbol":"MSFT","price":412.5}"#)))
            .unwrap();
        assert_eq!(price.symbol, "MSFT");
        assert_eq!(price.price, 412.5);
    }
}
