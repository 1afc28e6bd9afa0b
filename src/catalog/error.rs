use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`GameCatalog`](super::GameCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("table {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
