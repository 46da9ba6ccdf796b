//! Rust client library for the Financial Modeling Prep API
//!
//! # Quick Start
//!
//! ```no_run
//! use fmprep::FinancialModelingPrep;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FinancialModelingPrep::default();
//!     let cash_flow = client.cashflow_statement("AAPL", "annual").await?;
//!     println!("{}", cash_flow);
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! Each endpoint returns a specific request builder type. Call `.get()` to execute:
//!
//! ```no_run
//! use fmprep::FinancialModelingPrep;
//! use fmprep::request::common::Period;
//! use fmprep::rest::{fundamentals, prices};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FinancialModelingPrep::default().with_key("your_api_key");
//!
//! // Parsed JSON
//! let json = fundamentals::balance_sheet_statement(&client, "AAPL")
//!     .period(Period::Quarter)
//!     .get()
//!     .await?;
//!
//! // Bounded price history, raw body
//! let body = prices::historical_price_full(&client, "AAPL")
//!     .from("2020-01-02")
//!     .to("2020-01-31")
//!     .raw()
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** - Enables loading configuration from environment variables via [`dotenvy`](https://docs.rs/dotenvy).
//!   Adds `FinancialModelingPrep::new()` which loads `FMP_API_KEY` (and optionally `FMP_BASE_URL`)
//!   from `.env` or environment. Without this feature, requests carry no key unless
//!   [`with_key`](client::FinancialModelingPrep::with_key) is used.
//!
//! - **`table`** - Enables Polars DataFrame output via [`polars`](https://docs.rs/polars).

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod rest;

pub mod execute;
pub mod processor;

pub use config::Config;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

/// The main Financial Modeling Prep API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::FinancialModelingPrep<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type FinancialModelingPrep = client::FinancialModelingPrep<reqwest::Client>;

/// The main Financial Modeling Prep API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::FinancialModelingPrep<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type FinancialModelingPrep = client::FinancialModelingPrep<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic client
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::FinancialModelingPrep;

#[cfg(any(feature = "reqwest", feature = "hyper"))]
static STATIC_INSTANCE: std::sync::LazyLock<arc_swap::ArcSwap<FinancialModelingPrep>> =
    std::sync::LazyLock::new(|| arc_swap::ArcSwap::from_pointee(FinancialModelingPrep::default()));

/// Replace the shared client, returning the previous one.
#[cfg(any(feature = "reqwest", feature = "hyper"))]
pub fn initialize(client: FinancialModelingPrep) -> std::sync::Arc<FinancialModelingPrep> {
    STATIC_INSTANCE.swap(std::sync::Arc::from(client))
}

/// Get the shared client.
#[cfg(any(feature = "reqwest", feature = "hyper"))]
pub fn instance() -> std::sync::Arc<FinancialModelingPrep> {
    STATIC_INSTANCE.load().clone()
}
