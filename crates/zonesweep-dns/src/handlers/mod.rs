//! HTTP handlers for the zone record API
//!
//! Each endpoint is a one-to-one translation to a provider call: list a
//! zone's records, list its distinct record types, delete one record. Every
//! provider failure becomes a 400 response carrying the provider's message;
//! no failure is retried and none terminates the process.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::providers::{DnsProvider, RecordView};

/// Application state for DNS handlers
///
/// The provider is injected so tests can substitute an in-memory fake.
#[derive(Clone)]
pub struct DnsAppState {
    pub provider: Arc<dyn DnsProvider>,
}

/// Error body returned for a failed provider call
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The provider's failure message, verbatim
    #[schema(example = "Zone not found: example.com")]
    pub error: String,
}

/// Fixed acknowledgment for a successful deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "success")]
    pub status: String,
}

fn provider_error(error: &crate::errors::DnsError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

/// List all DNS records in a zone
#[utoipa::path(
    tag = "DNS Records",
    get,
    path = "/api/records/{zone}",
    params(
        ("zone" = String, Path, description = "Zone name, e.g. example.com")
    ),
    responses(
        (status = 200, description = "All records in the zone, provider order", body = Vec<RecordView>),
        (status = 400, description = "Zone resolution or record listing failed", body = ErrorResponse),
    )
)]
async fn list_records(
    State(state): State<Arc<DnsAppState>>,
    Path(zone): Path<String>,
) -> impl IntoResponse {
    match state.provider.list_records(&zone).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => provider_error(&e).into_response(),
    }
}

/// List the distinct record types present in a zone
///
/// Output order is unspecified; callers must not rely on it.
#[utoipa::path(
    tag = "DNS Records",
    get,
    path = "/api/types/{zone}",
    params(
        ("zone" = String, Path, description = "Zone name, e.g. example.com")
    ),
    responses(
        (status = 200, description = "Distinct record types, unordered", body = Vec<String>),
        (status = 400, description = "Zone resolution or record listing failed", body = ErrorResponse),
    )
)]
async fn list_types(
    State(state): State<Arc<DnsAppState>>,
    Path(zone): Path<String>,
) -> impl IntoResponse {
    match state.provider.list_records(&zone).await {
        Ok(records) => {
            let types: HashSet<String> =
                records.into_iter().map(|record| record.record_type).collect();
            let types: Vec<String> = types.into_iter().collect();
            (StatusCode::OK, Json(types)).into_response()
        }
        Err(e) => provider_error(&e).into_response(),
    }
}

/// Delete a DNS record from a zone
///
/// Deleting an identifier the provider no longer knows fails with the
/// provider's error; no idempotency is layered on top.
#[utoipa::path(
    tag = "DNS Records",
    delete,
    path = "/api/record/{zone}/{id}",
    params(
        ("zone" = String, Path, description = "Zone name, e.g. example.com"),
        ("id" = String, Path, description = "Provider-issued record identifier")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DeleteResponse),
        (status = 400, description = "Zone resolution or deletion failed", body = ErrorResponse),
    )
)]
async fn delete_record(
    State(state): State<Arc<DnsAppState>>,
    Path((zone, id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.provider.delete_record(&zone, &id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                status: "success".to_string(),
            }),
        )
            .into_response(),
        Err(e) => provider_error(&e).into_response(),
    }
}

/// Configure DNS routes; the CLI nests these under `/api`
pub fn configure_routes() -> Router<Arc<DnsAppState>> {
    Router::new()
        .route("/records/{zone}", get(list_records))
        .route("/types/{zone}", get(list_types))
        .route("/record/{zone}/{id}", delete(delete_record))
}

#[derive(OpenApi)]
#[openapi(
    paths(list_records, list_types, delete_record),
    components(schemas(RecordView, ErrorResponse, DeleteResponse)),
    tags(
        (name = "DNS Records", description = "Zone record listing and deletion")
    )
)]
pub struct DnsApiDoc;
