//! Execution of request builders
//!
//! Every endpoint builder validates its parameters, builds its URL, sends one
//! GET through the client's transport and hands the result to its processor.
//! `Execute` is the `.get()` that runs those steps.

use crate::error::Result;

/// Runs a request builder
pub trait Execute {
    /// What the builder's processor produces
    type Output;

    /// Send the request and process the response
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
