//! Catalog loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading catalog exports.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An export file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An export file is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
