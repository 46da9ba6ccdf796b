//! Error types for the Financial Modeling Prep client

/// Errors returned by the client, its transports and processors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied argument was rejected before any request was made
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be sent or its body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// Request ID echoed by the server, if any
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The response body was not the JSON we expected
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error raised by the reqwest HTTP client
    #[cfg(feature = "reqwest")]
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// `FMP_API_KEY` was not found in the environment
    #[error("FMP_API_KEY not set in environment or .env file")]
    MissingApiKey,

    /// Any other failure
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Whether this error came from the network or the HTTP layer rather than
    /// from the caller's input or the response payload.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Transport(_) | Error::ApiError { .. } => true,
            #[cfg(feature = "reqwest")]
            Error::Reqwest(_) => true,
            _ => false,
        }
    }
}

/// Result type used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
