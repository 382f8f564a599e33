//! # cardstock-renderer
//!
//! Tera-based template engine that turns one [`Slide`] into a complete SVG
//! document, with domain highlighting applied to the body text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cardstock_core::types::Slide;
//! use cardstock_renderer::TemplateEngine;
//!
//! fn render_all(slides: &[Slide], date: &str) {
//!     if let Ok(engine) = TemplateEngine::new() {
//!         for (index, slide) in slides.iter().enumerate() {
//!             if let Ok(markup) = engine.render_slide(slide, index, slides.len(), date) {
//!                 println!("{}: {} bytes", index + 1, markup.len());
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! [`Slide`]: cardstock_core::types::Slide

pub mod context;
pub mod engine;
pub mod error;
pub mod formatter;

pub use context::{SlideContext, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use engine::TemplateEngine;
pub use error::RenderError;
pub use formatter::format_content;
