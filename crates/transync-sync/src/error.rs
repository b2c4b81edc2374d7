//! Error types for file synchronization.

use std::path::PathBuf;

/// Errors that stop a single language from being synchronized.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The language directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the translation file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serializing the merged tree failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
