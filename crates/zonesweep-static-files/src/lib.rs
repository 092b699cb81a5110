//! Static file serving for Zonesweep
//!
//! Serves the prebuilt web frontend from disk under the `/app` prefix and
//! answers any route no other handler matched with the SPA entry point, so
//! client-side routing works on hard refresh.

pub mod handler;
pub mod service;

pub use handler::{configure_routes, FileApiDoc, FileState};
pub use service::FileService;
