/// Error types for shape loading and vertex parsing
use thiserror::Error;

/// Top-level error type for the isoplot core.
#[derive(Debug, Error)]
pub enum IsoplotError {
    /// A persisted vertex did not have exactly three numeric components.
    /// Surfaced at the parse boundary; once a `Vertex` exists it is
    /// well-formed by construction.
    #[error("shape {shape:?}: vertex {index} has {found} components, expected 3")]
    InvalidVertex {
        shape: String,
        index: usize,
        found: usize,
    },

    #[error("failed to parse shape library: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`IsoplotError`].
pub type Result<T> = std::result::Result<T, IsoplotError>;
