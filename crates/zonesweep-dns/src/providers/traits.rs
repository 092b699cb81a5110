//! DNS provider trait definitions
//!
//! The trait carries only the three operations the gateway performs: resolve
//! a zone name, list a zone's records, delete one record. The zone handle
//! returned by resolution is a plain provider-issued identifier string.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::DnsError;

/// The four-field projection of a provider DNS record exposed by this API
///
/// Fields are copied verbatim from the corresponding provider record; no
/// normalization or validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecordView {
    /// Provider-issued record identifier
    #[schema(example = "372e67954025e0ba6aaa6d586b9e0b59")]
    pub id: String,

    /// Fully qualified record name
    #[schema(example = "www.example.com")]
    pub name: String,

    /// Record type as reported by the provider
    #[serde(rename = "type")]
    #[schema(example = "A")]
    pub record_type: String,

    /// Record content as reported by the provider
    #[schema(example = "192.0.2.1")]
    pub content: String,
}

/// Core DNS provider trait
///
/// Implementations must be safe for concurrent read-only use: one instance
/// is constructed at startup and shared by every request for the process
/// lifetime.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Resolve a zone name to the provider's opaque zone identifier
    async fn resolve_zone_id(&self, zone_name: &str) -> Result<String, DnsError>;

    /// List every record in a zone, in the order the provider returns them
    async fn list_records(&self, zone_name: &str) -> Result<Vec<RecordView>, DnsError>;

    /// Delete a record by provider identifier within a zone
    ///
    /// Deletion semantics are provider-defined; deleting an absent record is
    /// expected to fail rather than succeed silently.
    async fn delete_record(&self, zone_name: &str, record_id: &str) -> Result<(), DnsError>;
}
