//! Error types for cardstock-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading and validating a content document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("cannot read content document at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("failed to parse content document at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but contains no slides; there is nothing to render.
    #[error("content document has no slides")]
    Empty,
}
