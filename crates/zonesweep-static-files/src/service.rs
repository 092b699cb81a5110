//! File Service
//!
//! Reads frontend assets from the prebuilt static directory.

use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

#[derive(Clone)]
pub struct FileService {
    static_dir: PathBuf,
}

impl FileService {
    pub fn new(static_dir: PathBuf) -> Self {
        Self { static_dir }
    }

    /// Read a file from the static directory
    ///
    /// # Arguments
    /// * `file_path` - Relative path from the static dir (e.g., "assets/app.js")
    ///
    /// # Security
    /// - Path traversal is prevented by canonicalizing the path
    /// - Only files within the static dir can be accessed
    pub async fn get_file(&self, file_path: &str) -> Result<Vec<u8>, std::io::Error> {
        let requested_path = self.static_dir.join(file_path);

        // Canonicalize to prevent path traversal attacks
        let canonical_path = requested_path.canonicalize()?;
        let canonical_static_dir = self.static_dir.canonicalize()?;

        // Ensure the requested file is within the static dir
        if !canonical_path.starts_with(&canonical_static_dir) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Access denied: path outside static directory",
            ));
        }

        debug!("Reading file: {}", canonical_path.display());

        fs::read(canonical_path).await
    }

    /// Read the single-page entry point served for unmatched routes
    pub async fn index_html(&self) -> Result<Vec<u8>, std::io::Error> {
        self.get_file("index.html").await
    }
}
