//! Error types for the catalog importer.
//!
//! Fatal errors (unreadable source root, unwritable destination, catalog
//! serialization failure) propagate to the binary and abort the run. A
//! single image-copy failure is deliberately not represented here: it is
//! logged and the affected product is skipped while traversal continues.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for importer operations
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("source root {path:?} is not readable: {source}")]
    SourceRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to prepare destination directory {path:?}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write catalog file {path:?}: {source}")]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ImportError {
    fn from(err: config::ConfigError) -> Self {
        ImportError::ConfigError(err.to_string())
    }
}
