//! Tera rendering engine — [`TemplateEngine`].
//!
//! The slide template is baked into the binary at compile time via
//! `include_str!`. One document is produced per slide; the document is a
//! deterministic function of `(slide, index, total, date)` and is never
//! persisted — it exists only to be handed to the raster engine.

use tera::Tera;

use cardstock_core::types::Slide;

use crate::context::SlideContext;
use crate::error::RenderError;

const SLIDE_TEMPLATE_NAME: &str = "slide.svg.tera";
const SLIDE_TEMPLATE: &str = include_str!("templates/slide.svg.tera");

/// Tera-based engine rendering one SVG document per slide.
///
/// Uses the embedded template only. Create once with [`TemplateEngine::new`]
/// and reuse across the batch.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`] with the embedded slide template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(SLIDE_TEMPLATE_NAME, SLIDE_TEMPLATE)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the complete SVG document for slide `index` of `total`.
    ///
    /// `date` is the shared batch date label; position-dependent styling
    /// (first-slide heading emphasis, last-slide italic body) is derived from
    /// `index` and `total`.
    pub fn render_slide(
        &self,
        slide: &Slide,
        index: usize,
        total: usize,
        date: &str,
    ) -> Result<String, RenderError> {
        let ctx = SlideContext::build(slide, index, total, date);
        let tera_ctx = tera::Context::from_serialize(&ctx)?;
        self.tera
            .render(SLIDE_TEMPLATE_NAME, &tera_ctx)
            .map_err(RenderError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
