//! DNS provider error types

use thiserror::Error;

/// Errors produced while talking to the DNS provider
///
/// Every variant surfaces to the HTTP caller as a 400 response carrying the
/// error's display text; nothing is retried or recovered internally.
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_detail() {
        let err = DnsError::ZoneNotFound("example.com".to_string());
        assert_eq!(err.to_string(), "Zone not found: example.com");

        let err = DnsError::ApiError("Unknown X-Auth-Key or X-Auth-Email".to_string());
        assert_eq!(err.to_string(), "API error: Unknown X-Auth-Key or X-Auth-Email");
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DnsError = parse_err.into();
        assert!(matches!(err, DnsError::Serialization(_)));
    }
}
