//! Domain types for the cardstock pipeline.
//!
//! All types are serializable/deserializable via serde + serde_json; the
//! content document is the external input format, the manifest is the
//! sidecar record written next to the rendered images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input document
// ---------------------------------------------------------------------------

/// One unit of content, mapped to exactly one output image.
///
/// Both fields are raw, unformatted text. `content` may carry domain tokens
/// (percentage deltas, ticker symbols) that the formatter highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub heading: String,
    pub content: String,
}

/// The batch input, read once at process start and never mutated.
///
/// Slide order is significant: it maps directly to output page numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Display name of the whole batch.
    pub title: String,
    /// Ordered slides; must be non-empty (see [`ContentDocument::validate`]).
    pub slides: Vec<Slide>,
    /// Passed through verbatim into the manifest.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Passed through verbatim into the manifest.
    pub caption: String,
}

// ---------------------------------------------------------------------------
// Output manifest
// ---------------------------------------------------------------------------

/// Sidecar record describing a completed artifact set.
///
/// `images` lists filenames in page order; `images.len()` always equals the
/// source document's slide count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub title: String,
    pub tags: Vec<String>,
    pub caption: String,
    pub slides_count: usize,
    pub generated_at: DateTime<Utc>,
    pub images: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
