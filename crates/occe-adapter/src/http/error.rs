/*
[INPUT]:  Error sources (exchange envelope, HTTP transport, JSON, URL, configuration)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the OCCE adapter
#[derive(Error, Debug)]
pub enum OcceError {
    /// Exchange answered with a non-success envelope
    #[error("Exchange API response error: {message}")]
    Exchange { message: String },

    /// Coin lookup found no matching currency entry
    #[error("No balance entry for coin {coin}")]
    BalanceNotFound { coin: String },

    /// Authenticated endpoint called on a client without credentials
    #[error("Access key and secret key are required for authenticated endpoints")]
    MissingCredentials,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OcceError {
    /// Check if the exchange itself rejected the request
    pub fn is_exchange_error(&self) -> bool {
        matches!(self, OcceError::Exchange { .. })
    }

    /// Message carried by an exchange rejection
    pub fn exchange_message(&self) -> Option<&str> {
        match self {
            OcceError::Exchange { message } => Some(message),
            _ => None,
        }
    }

    /// Create an exchange rejection from a message
    pub fn exchange(message: impl Into<String>) -> Self {
        OcceError::Exchange {
            message: message.into(),
        }
    }
}

/// Result type alias for OCCE operations
pub type Result<T> = std::result::Result<T, OcceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_error_message() {
        let err = OcceError::exchange("Insufficient funds");
        assert!(err.is_exchange_error());
        assert_eq!(err.exchange_message(), Some("Insufficient funds"));
        assert_eq!(
            err.to_string(),
            "Exchange API response error: Insufficient funds"
        );
    }

    #[test]
    fn test_non_exchange_errors() {
        assert!(!OcceError::MissingCredentials.is_exchange_error());
        assert_eq!(OcceError::MissingCredentials.exchange_message(), None);

        let err = OcceError::BalanceNotFound {
            coin: "DOGE".to_string(),
        };
        assert!(!err.is_exchange_error());
        assert_eq!(err.to_string(), "No balance entry for coin DOGE");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: OcceError = parse_err.into();
        match err {
            OcceError::Serialization(_) => {}
            other => panic!("Expected Serialization error variant, got {other:?}"),
        }
    }
}
