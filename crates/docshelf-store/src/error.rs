use std::path::PathBuf;

/// Errors from storage backend operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sidecar (de)serialization failure.
    #[error("sidecar serialization error: {0}")]
    Sidecar(#[from] serde_json::Error),

    /// The vector optimizer collaborator failed on a source file.
    #[error("vector optimization failed for {}: {reason}", .path.display())]
    Optimize { path: PathBuf, reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
