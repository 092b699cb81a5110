//! DNS gateway for Zonesweep
//!
//! This crate wraps the Cloudflare management API behind a small provider
//! abstraction and exposes the HTTP handlers that translate the gateway's
//! three endpoints into provider calls.
//!
//! Nothing is stored: every request resolves the zone and fetches records
//! fresh from the provider, and the only process-wide state is the single
//! provider client built once at startup.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use zonesweep_dns::handlers::{configure_routes, DnsAppState};
//! use zonesweep_dns::{CloudflareCredentials, CloudflareProvider};
//!
//! let credentials = CloudflareCredentials::from_env()?;
//! let provider = Arc::new(CloudflareProvider::new(credentials));
//! let router = configure_routes().with_state(Arc::new(DnsAppState { provider }));
//! ```

pub mod errors;
pub mod handlers;
pub mod providers;

// Re-export main types
pub use errors::DnsError;
pub use providers::{CloudflareCredentials, CloudflareProvider, DnsProvider, RecordView};
