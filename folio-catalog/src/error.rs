//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Catalog construction errors.
///
/// Only construction can fail. Queries against a built catalog never error;
/// a slug miss is reported as `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share a slug.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),

    /// Catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed or doesn't match the entry model.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
