//! REST API endpoints for Financial Modeling Prep
pub mod raw;
pub mod share_prices;

// Re-export raw module for convenience.
pub use raw::*;
