//! Error types for cardstock-export.

use std::path::PathBuf;

use thiserror::Error;

use cardstock_core::DocumentError;
use cardstock_renderer::RenderError;

/// All errors that can arise from batch export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The content document failed validation.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// An error from the template renderer.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The raster engine failed to start or rejected a document.
    #[error("raster engine error: {reason}")]
    Engine { reason: String },

    /// A per-slide failure, annotated with the 1-based page number.
    #[error("failed to render slide {page}: {source}")]
    Slide {
        page: usize,
        #[source]
        source: Box<ExportError>,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding error while persisting a raster.
    #[error("image encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Manifest JSON serialization error.
    #[error("manifest JSON error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Convenience constructor for [`ExportError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`ExportError::Engine`].
pub(crate) fn engine_err(reason: impl Into<String>) -> ExportError {
    ExportError::Engine {
        reason: reason.into(),
    }
}
