//! Provider credential types

use crate::errors::DnsError;

/// Cloudflare legacy API key credentials (API key + account email)
///
/// The pair maps to the `X-Auth-Key` / `X-Auth-Email` headers of the
/// Cloudflare v4 API.
#[derive(Debug, Clone)]
pub struct CloudflareCredentials {
    pub api_key: String,
    pub api_email: String,
}

impl CloudflareCredentials {
    /// Read credentials from the process environment at startup
    ///
    /// Requires `CF_API_KEY` and `CF_API_EMAIL` to be set.
    pub fn from_env() -> Result<Self, DnsError> {
        let api_key = std::env::var("CF_API_KEY")
            .map_err(|_| DnsError::InvalidCredentials("CF_API_KEY is not set".to_string()))?;
        let api_email = std::env::var("CF_API_EMAIL")
            .map_err(|_| DnsError::InvalidCredentials("CF_API_EMAIL is not set".to_string()))?;

        Ok(Self { api_key, api_email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_creation() {
        let creds = CloudflareCredentials {
            api_key: "test_key_12345".to_string(),
            api_email: "admin@example.com".to_string(),
        };

        assert_eq!(creds.api_key, "test_key_12345");
        assert_eq!(creds.api_email, "admin@example.com");
    }

    #[test]
    fn test_credentials_clone() {
        let creds = CloudflareCredentials {
            api_key: "k".to_string(),
            api_email: "e@example.com".to_string(),
        };
        let cloned = creds.clone();

        assert_eq!(cloned.api_key, creds.api_key);
        assert_eq!(cloned.api_email, creds.api_email);
    }
}
