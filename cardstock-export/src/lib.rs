//! # cardstock-export
//!
//! Batch orchestration: drives a raster engine over every slide of a content
//! document, persists page-ordered PNGs, then commits the manifest.
//!
//! ## Two-phase protocol
//!
//! 1. Render all slides, in strict ascending page order; any failure aborts
//!    the whole batch.
//! 2. Commit `metadata.json` only once every image exists on disk.
//!
//! Partial failure therefore never leaves a manifest pointing at missing
//! images. Already-written images are left in place on abort.

pub mod batch;
pub mod error;
pub mod manifest;
pub mod raster;

pub use batch::{date_label, export_batch, BatchResult};
pub use error::ExportError;
pub use raster::{RasterEngine, SvgRasterEngine, Viewport};
