//! Endpoint constructors returning request builders

pub mod fundamentals;
pub mod prices;
