//! Content-document loading and validation.
//!
//! The document is read once at process start; schema validation is minimal
//! (fields are consumed by name) and fails fast with a path-annotated error
//! rather than producing partial artifacts downstream.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::ContentDocument;

/// Load a [`ContentDocument`] from a JSON file.
///
/// Returns `DocumentError::Io` if the file cannot be read,
/// `DocumentError::Parse` (with path + line context) if malformed JSON,
/// and `DocumentError::Empty` if the slide list is empty.
pub fn load(path: &Path) -> Result<ContentDocument, DocumentError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document: ContentDocument =
        serde_json::from_str(&contents).map_err(|e| DocumentError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    document.validate()?;
    Ok(document)
}

impl ContentDocument {
    /// Check the invariants that serde cannot express: at least one slide.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.slides.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
