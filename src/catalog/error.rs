//! Catalog-specific error types
//!
//! Loading is the only fallible step in the catalog's life: once a catalog
//! exists it is immutable and every query over it is infallible.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or verifying a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON catalog could not be decoded
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV catalog could not be decoded
    #[error("Invalid CSV catalog: {0}")]
    Csv(#[from] csv::Error),

    /// File extension is neither `.json` nor `.csv`
    #[error("Unsupported catalog format: {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),

    /// Two or more records share a title under a strict identity policy
    #[error("Duplicate titles in catalog: {}", .0.join(", "))]
    DuplicateIdentity(Vec<String>),
}
