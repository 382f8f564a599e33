//! Raster engine — the markup + viewport → pixels capability.
//!
//! The orchestrator only sees [`RasterEngine`]; the production
//! implementation parses the SVG document with `usvg` and rasterizes it with
//! `resvg` into a fixed-size pixmap. The engine is constructed once per batch
//! (the font database load is the amortized setup cost) and released when the
//! batch scope ends, on success and failure paths alike.

use std::sync::Arc;

use image::RgbaImage;

use cardstock_renderer::{CANVAS_HEIGHT, CANVAS_WIDTH};

use crate::error::{engine_err, ExportError};

/// Fixed render viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Opaque rendering capability: styled markup in, raster image out.
pub trait RasterEngine {
    /// Rasterize one complete SVG document at the given viewport.
    fn rasterize(&mut self, markup: &str, viewport: Viewport) -> Result<RgbaImage, ExportError>;
}

/// Production engine: `usvg` parse + `resvg` raster.
///
/// The font database is loaded once at construction and shared across every
/// rasterization in the batch.
pub struct SvgRasterEngine {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRasterEngine {
    /// Start the engine: probe the render surface allocator and load system
    /// fonts. An unusable engine fails here, before any slide is rendered.
    pub fn new() -> Result<Self, ExportError> {
        let probe = Viewport::default();
        resvg::tiny_skia::Pixmap::new(probe.width, probe.height)
            .ok_or_else(|| engine_err("cannot allocate render surface"))?;

        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        if fontdb.is_empty() {
            tracing::warn!("no system fonts found; slide text will not be drawn");
        }
        tracing::debug!("raster engine ready ({} font faces)", fontdb.len());

        Ok(SvgRasterEngine {
            fontdb: Arc::new(fontdb),
        })
    }
}

impl RasterEngine for SvgRasterEngine {
    fn rasterize(&mut self, markup: &str, viewport: Viewport) -> Result<RgbaImage, ExportError> {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(markup, &options)
            .map_err(|e| engine_err(format!("markup rejected: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(viewport.width, viewport.height)
            .ok_or_else(|| {
                engine_err(format!(
                    "cannot allocate {}x{} pixmap",
                    viewport.width, viewport.height
                ))
            })?;

        let sx = viewport.width as f32 / tree.size().width();
        let sy = viewport.height as f32 / tree.size().height();
        let transform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia pixmaps are premultiplied; demultiply into straight RGBA.
        let mut raster = RgbaImage::new(viewport.width, viewport.height);
        for (dst, px) in raster.pixels_mut().zip(pixmap.pixels()) {
            let c = px.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(raster)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_starts() {
        SvgRasterEngine::new().expect("engine startup");
    }

    #[test]
    fn rasterize_scales_markup_to_viewport() {
        let markup = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
        let mut engine = SvgRasterEngine::new().unwrap();
        let raster = engine
            .rasterize(markup, Viewport { width: 20, height: 20 })
            .expect("rasterize");
        assert_eq!(raster.dimensions(), (20, 20));
        assert_eq!(raster.get_pixel(0, 0), &image::Rgba([255, 0, 0, 255]));
        assert_eq!(raster.get_pixel(19, 19), &image::Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn default_viewport_matches_canvas() {
        let viewport = Viewport::default();
        assert_eq!((viewport.width, viewport.height), (1080, 1350));
    }

    #[test]
    fn invalid_markup_is_an_engine_error() {
        let mut engine = SvgRasterEngine::new().unwrap();
        let err = engine
            .rasterize("this is not svg", Viewport::default())
            .expect_err("must fail");
        assert!(matches!(err, ExportError::Engine { .. }));
    }
}
