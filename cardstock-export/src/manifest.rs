//! Metadata writer — sidecar manifest for a completed artifact set.

use std::path::{Path, PathBuf};

use chrono::Utc;

use cardstock_core::types::{ContentDocument, Manifest};

use crate::error::{io_err, ExportError};

/// Manifest filename within the output directory.
pub const MANIFEST_FILENAME: &str = "metadata.json";

/// Build the manifest record for a completed batch.
///
/// `images` must be the page-ordered filenames produced by the render loop;
/// its length always equals the document's slide count.
pub fn build_manifest(document: &ContentDocument, images: &[String]) -> Manifest {
    Manifest {
        title: document.title.clone(),
        tags: document.tags.clone(),
        caption: document.caption.clone(),
        slides_count: document.slides.len(),
        generated_at: Utc::now(),
        images: images.to_vec(),
    }
}

/// Write `metadata.json` for a fully rendered batch and return its path.
///
/// Invoked only after every image has been produced. A failure here is fatal
/// to the run and must be surfaced by the caller, not swallowed — the images
/// are on disk but the batch is unreported.
pub fn write_manifest(
    document: &ContentDocument,
    images: &[String],
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let manifest = build_manifest(document, images);
    let json = serde_json::to_string_pretty(&manifest)?;
    let path = output_dir.join(MANIFEST_FILENAME);
    std::fs::write(&path, json).map_err(|e| io_err(&path, e))?;
    tracing::info!("wrote manifest: {}", path.display());
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
