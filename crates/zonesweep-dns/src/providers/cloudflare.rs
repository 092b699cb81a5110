//! Cloudflare DNS provider implementation
//!
//! This provider talks to the Cloudflare v4 API with the legacy API key +
//! account email pair. Zone names are resolved to zone identifiers through a
//! name-filtered zone listing; records are fetched and deleted with the
//! resolved identifier.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::credentials::CloudflareCredentials;
use super::traits::{DnsProvider, RecordView};
use crate::errors::DnsError;

const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare DNS provider
///
/// Holds the one HTTP client constructed at startup; never mutated after
/// construction, so it is shared freely across concurrent requests.
pub struct CloudflareProvider {
    client: Client,
    credentials: CloudflareCredentials,
    base_url: String,
}

/// Cloudflare v4 response envelope
#[derive(Debug, Deserialize)]
struct CfResponse<T> {
    success: bool,
    #[serde(default)]
    errors: Vec<CfApiError>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CfApiError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct CfZone {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CfDnsRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    content: String,
}

impl CloudflareProvider {
    /// Create a new Cloudflare provider with the given credentials
    pub fn new(credentials: CloudflareCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: CF_API_BASE.to_string(),
        }
    }

    /// Create a provider with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(credentials: CloudflareCredentials, base_url: String) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url,
        }
    }

    /// Perform an authenticated GET and unwrap the response envelope
    async fn api_get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, DnsError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Cloudflare API request: GET {}", path);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Key", &self.credentials.api_key)
            .header("X-Auth-Email", &self.credentials.api_email)
            .send()
            .await?;

        let body = response.text().await?;
        let envelope: CfResponse<T> = serde_json::from_str(&body)?;

        Self::unwrap_envelope(envelope)
    }

    /// Perform an authenticated DELETE; Cloudflare answers with an envelope
    /// whose result carries only the deleted record's id
    async fn api_delete(&self, path: &str) -> Result<(), DnsError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Cloudflare API request: DELETE {}", path);

        let response = self
            .client
            .delete(&url)
            .header("X-Auth-Key", &self.credentials.api_key)
            .header("X-Auth-Email", &self.credentials.api_email)
            .send()
            .await?;

        let body = response.text().await?;
        let envelope: CfResponse<serde_json::Value> = serde_json::from_str(&body)?;

        if !envelope.success {
            return Err(Self::envelope_error(&envelope.errors));
        }

        Ok(())
    }

    fn unwrap_envelope<T>(envelope: CfResponse<T>) -> Result<T, DnsError> {
        if !envelope.success {
            return Err(Self::envelope_error(&envelope.errors));
        }

        envelope
            .result
            .ok_or_else(|| DnsError::ApiError("Response missing result field".to_string()))
    }

    /// Surface the first provider error message verbatim
    fn envelope_error(errors: &[CfApiError]) -> DnsError {
        match errors.first() {
            Some(e) => {
                error!("Cloudflare API error {}: {}", e.code, e.message);
                DnsError::ApiError(e.message.clone())
            }
            None => DnsError::ApiError("Unknown error".to_string()),
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    async fn resolve_zone_id(&self, zone_name: &str) -> Result<String, DnsError> {
        let zones: Vec<CfZone> = self
            .api_get(&format!("/zones?name={}", urlencoding::encode(zone_name)))
            .await?;

        zones
            .first()
            .map(|zone| zone.id.clone())
            .ok_or_else(|| DnsError::ZoneNotFound(zone_name.to_string()))
    }

    async fn list_records(&self, zone_name: &str) -> Result<Vec<RecordView>, DnsError> {
        let zone_id = self.resolve_zone_id(zone_name).await?;

        // No filter: the caller gets every record in provider order
        let records: Vec<CfDnsRecord> = self
            .api_get(&format!("/zones/{}/dns_records", zone_id))
            .await?;

        Ok(records
            .into_iter()
            .map(|record| RecordView {
                id: record.id,
                name: record.name,
                record_type: record.record_type,
                content: record.content,
            })
            .collect())
    }

    async fn delete_record(&self, zone_name: &str, record_id: &str) -> Result<(), DnsError> {
        let zone_id = self.resolve_zone_id(zone_name).await?;

        self.api_delete(&format!("/zones/{}/dns_records/{}", zone_id, record_id))
            .await
    }
}
