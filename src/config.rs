//! Client configuration
use serde::{Deserialize, Serialize};

/// Base URL of the v3 REST API
pub const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Where requests go and which key, if any, they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API root, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Appended as `apikey=` to every request when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Reads `.env` if present, then `FMP_API_KEY` (required) and
    /// `FMP_BASE_URL` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`](crate::Error::MissingApiKey) if `FMP_API_KEY` is not set.
    #[cfg(feature = "dotenvy")]
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let api_key = std::env::var("FMP_API_KEY").map_err(|_| crate::Error::MissingApiKey)?;
        let base_url = std::env::var("FMP_BASE_URL").unwrap_or_else(|_| default_base_url());

        Ok(Self {
            base_url,
            api_key: Some(api_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_v3_without_key() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://financialmodelingprep.com/api/v3");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key":"demo"}"#).unwrap();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.api_key.as_deref(), Some("demo"));
    }
}
