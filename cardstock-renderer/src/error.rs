//! Error types for cardstock-renderer.

use thiserror::Error;

/// All errors that can arise from slide template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),
}
