//! Cardstock core library — content-document types, loading, errors.
//!
//! Public API surface:
//! - [`types`] — [`ContentDocument`], [`Slide`], [`Manifest`]
//! - [`error`] — [`DocumentError`]
//! - [`document`] — load / validate

pub mod document;
pub mod error;
pub mod types;

pub use error::DocumentError;
pub use types::{ContentDocument, Manifest, Slide};
