//! DNS provider abstraction
//!
//! The gateway speaks to exactly one provider (Cloudflare), but handlers
//! only see the [`DnsProvider`] trait so tests can substitute an in-memory
//! implementation.

mod cloudflare;
mod credentials;
mod traits;

pub use cloudflare::CloudflareProvider;
pub use credentials::CloudflareCredentials;
pub use traits::{DnsProvider, RecordView};
