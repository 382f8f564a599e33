//! Batch orchestration — the render-all, then-commit-manifest loop.
//!
//! Slides render sequentially in page order against a single engine
//! instance; the engine is a stateful shared resource and is exclusively
//! borrowed for the run's duration. Parallel renders would need one isolated
//! engine per in-flight slide plus index-ordered filename attribution.

use std::path::{Path, PathBuf};

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use cardstock_core::types::{ContentDocument, Slide};
use cardstock_renderer::TemplateEngine;

use crate::error::{io_err, ExportError};
use crate::manifest;
use crate::raster::{RasterEngine, Viewport};

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern"));

/// Image filename for a 1-based page number.
pub fn image_filename(page: usize) -> String {
    format!("slide_{page}.png")
}

/// Shared batch date label: the first `YYYY-MM-DD` substring of the output
/// path if present, else the current UTC date. Derived once per run and
/// identical across every slide in the batch.
pub fn date_label(output_dir: &Path) -> String {
    let haystack = output_dir.to_string_lossy();
    match DATE_PATTERN.find(&haystack) {
        Some(m) => m.as_str().to_string(),
        None => Utc::now().format("%Y-%m-%d").to_string(),
    }
}

/// Outcome of a fully committed batch.
#[derive(Debug)]
pub struct BatchResult {
    /// Page-ordered image filenames; `images[i]` corresponds to slide `i`.
    pub images: Vec<String>,
    /// Path of the committed `metadata.json`.
    pub manifest_path: PathBuf,
}

/// Render every slide of `document` into `output_dir` and commit the
/// manifest. Fails as a whole on the first error; a per-slide failure is
/// annotated with its 1-based page number and no manifest is written.
pub fn export_batch(
    document: &ContentDocument,
    output_dir: &Path,
    engine: &mut dyn RasterEngine,
) -> Result<BatchResult, ExportError> {
    document.validate()?;

    let total = document.slides.len();
    let date = date_label(output_dir);
    tracing::info!("rendering {total} slides into {}", output_dir.display());

    std::fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e))?;
    let templates = TemplateEngine::new()?;

    // Phase one: render every slide, in strict ascending page order.
    let mut images = Vec::with_capacity(total);
    for (index, slide) in document.slides.iter().enumerate() {
        let page = index + 1;
        let filename = image_filename(page);
        let path = output_dir.join(&filename);
        render_slide_to_disk(&templates, slide, index, total, &date, engine, &path).map_err(
            |source| ExportError::Slide {
                page,
                source: Box::new(source),
            },
        )?;
        tracing::info!("rendered [{page}/{total}] {}", path.display());
        images.push(filename);
    }

    // Phase two: commit the manifest only once every image exists.
    let manifest_path = manifest::write_manifest(document, &images, output_dir)?;
    Ok(BatchResult {
        images,
        manifest_path,
    })
}

fn render_slide_to_disk(
    templates: &TemplateEngine,
    slide: &Slide,
    index: usize,
    total: usize,
    date: &str,
    engine: &mut dyn RasterEngine,
    path: &Path,
) -> Result<(), ExportError> {
    let markup = templates.render_slide(slide, index, total, date)?;
    let raster = engine.rasterize(&markup, Viewport::default())?;
    raster.save(path)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use cardstock_core::DocumentError;
    use image::RgbaImage;
    use tempfile::TempDir;

    /// Test double: always returns a blank raster of the requested size.
    struct BlankEngine;

    impl RasterEngine for BlankEngine {
        fn rasterize(
            &mut self,
            _markup: &str,
            viewport: Viewport,
        ) -> Result<RgbaImage, ExportError> {
            Ok(RgbaImage::new(viewport.width, viewport.height))
        }
    }

    /// Test double: fails on the nth rasterize call.
    struct FailingEngine {
        calls: usize,
        fail_on: usize,
    }

    impl RasterEngine for FailingEngine {
        fn rasterize(
            &mut self,
            _markup: &str,
            viewport: Viewport,
        ) -> Result<RgbaImage, ExportError> {
            self.calls += 1;
            if self.calls == self.fail_on {
                return Err(crate::error::engine_err("injected failure"));
            }
            Ok(RgbaImage::new(viewport.width, viewport.height))
        }
    }

    fn make_document(slides: usize) -> ContentDocument {
        ContentDocument {
            title: "batch".to_string(),
            slides: (0..slides)
                .map(|i| Slide {
                    heading: format!("Day {}", i + 1),
                    content: "SPY +1.0%".to_string(),
                })
                .collect(),
            tags: vec![],
            caption: "cap".to_string(),
        }
    }

    #[test]
    fn date_label_prefers_path_embedded_date() {
        let label = date_label(Path::new("/tmp/posts/2024-03-15-weekly"));
        assert_eq!(label, "2024-03-15");
    }

    #[test]
    fn date_label_falls_back_to_current_date() {
        let label = date_label(Path::new("/tmp/posts/weekly"));
        assert!(DATE_PATTERN.is_match(&label), "fallback not a date: {label}");
    }

    #[test]
    fn image_filenames_are_one_based() {
        assert_eq!(image_filename(1), "slide_1.png");
        assert_eq!(image_filename(12), "slide_12.png");
    }

    #[test]
    fn export_writes_images_and_manifest_in_page_order() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("batch");
        let doc = make_document(3);

        let result = export_batch(&doc, &out, &mut BlankEngine).expect("export");
        assert_eq!(result.images, vec!["slide_1.png", "slide_2.png", "slide_3.png"]);
        for image in &result.images {
            assert!(out.join(image).exists(), "{image} missing");
        }
        assert!(result.manifest_path.exists());
    }

    #[test]
    fn failure_mid_batch_aborts_and_writes_no_manifest() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("batch");
        let doc = make_document(3);
        let mut engine = FailingEngine { calls: 0, fail_on: 2 };

        let err = export_batch(&doc, &out, &mut engine).expect_err("must fail");
        match err {
            ExportError::Slide { page, .. } => assert_eq!(page, 2),
            other => panic!("expected Slide error, got {other:?}"),
        }

        assert!(out.join("slide_1.png").exists(), "already-written image kept");
        assert!(!out.join("slide_2.png").exists());
        assert!(
            !out.join(manifest::MANIFEST_FILENAME).exists(),
            "manifest must not be written on a failed batch"
        );
    }

    #[test]
    fn empty_document_rejected_before_any_filesystem_work() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("batch");
        let doc = ContentDocument {
            title: "t".to_string(),
            slides: vec![],
            tags: vec![],
            caption: "c".to_string(),
        };

        let err = export_batch(&doc, &out, &mut BlankEngine).expect_err("must fail");
        assert!(matches!(err, ExportError::Document(DocumentError::Empty)));
        assert!(!out.exists(), "output dir must not be created for an empty document");
    }

    #[test]
    fn export_creates_missing_output_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("deep").join("nested").join("2024-01-02");
        let doc = make_document(1);

        export_batch(&doc, &out, &mut BlankEngine).expect("export");
        assert!(out.join("slide_1.png").exists());
    }
}
