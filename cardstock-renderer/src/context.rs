//! Slide context — serializable rendering payload built from one [`Slide`].
//!
//! SVG text does not reflow, so line breaking is decided here, not in the
//! template: raw text is split on embedded newlines, then greedily
//! word-wrapped to a per-element column budget. Wrapping runs on raw text
//! *before* highlight formatting, so highlight tokens never straddle a line
//! break. The template only interpolates the precomputed baselines.
//!
//! [`Slide`]: cardstock_core::types::Slide

use serde::Serialize;

use cardstock_core::types::Slide;

use crate::formatter::{escape_text, format_content};

/// Fixed canvas width in logical units (and output pixels).
pub const CANVAS_WIDTH: u32 = 1080;
/// Fixed canvas height in logical units (and output pixels).
pub const CANVAS_HEIGHT: u32 = 1350;

/// Fixed footer disclaimer line.
pub const DISCLAIMER: &str = "Personal trading notes. Not investment advice.";
/// Fixed footer brand label.
pub const BRAND: &str = "AI Trading Journal";

// Layout contract, in canvas units. Header and footer are anchored; the main
// block is centered in the space between them.
const HEADER_BOTTOM_Y: i32 = 128;
const MAIN_BOTTOM_Y: i32 = 1170;

const HEADING_SIZE: u32 = 52;
const FIRST_HEADING_SIZE: u32 = 64;
const CONTENT_LINE_HEIGHT: i32 = 68;
const HEADING_CONTENT_GAP: i32 = 50;

const HEADING_COLUMNS: usize = 26;
const FIRST_HEADING_COLUMNS: usize = 21;
const CONTENT_COLUMNS: usize = 44;

/// One positioned line of markup.
#[derive(Debug, Clone, Serialize)]
pub struct TextLine {
    /// Baseline y coordinate in canvas units.
    pub y: i32,
    /// Escaped text, possibly carrying highlight markers.
    pub markup: String,
}

/// Rendering payload for one slide. Pure function of `(slide, index, total, date)`.
#[derive(Debug, Clone, Serialize)]
pub struct SlideContext {
    pub width: u32,
    pub height: u32,
    /// Shared date label, identical across the batch.
    pub date: String,
    /// 1-based page number.
    pub page: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub heading_size: u32,
    pub heading_lines: Vec<TextLine>,
    pub content_lines: Vec<TextLine>,
    pub disclaimer: String,
    pub brand: String,
}

impl SlideContext {
    /// Build a [`SlideContext`] for slide `index` of `total`.
    pub fn build(slide: &Slide, index: usize, total: usize, date: &str) -> Self {
        let is_first = index == 0;
        let is_last = index + 1 == total;

        let (heading_size, heading_columns) = if is_first {
            (FIRST_HEADING_SIZE, FIRST_HEADING_COLUMNS)
        } else {
            (HEADING_SIZE, HEADING_COLUMNS)
        };
        let heading_line_height = (heading_size as i32) * 13 / 10;

        let heading_raw = wrap_text(&slide.heading, heading_columns);
        let content_raw = wrap_text(&slide.content, CONTENT_COLUMNS);

        let main_height = heading_raw.len() as i32 * heading_line_height
            + HEADING_CONTENT_GAP
            + content_raw.len() as i32 * CONTENT_LINE_HEIGHT;
        let available = MAIN_BOTTOM_Y - HEADER_BOTTOM_Y;
        let top = HEADER_BOTTOM_Y + (available - main_height).max(0) / 2;

        let mut y = top;
        let heading_lines = heading_raw
            .into_iter()
            .map(|line| {
                y += heading_line_height;
                TextLine { y, markup: escape_text(&line) }
            })
            .collect();
        y += HEADING_CONTENT_GAP;
        let content_lines = content_raw
            .into_iter()
            .map(|line| {
                y += CONTENT_LINE_HEIGHT;
                TextLine { y, markup: format_content(&line) }
            })
            .collect();

        SlideContext {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            date: date.to_string(),
            page: index + 1,
            total,
            is_first,
            is_last,
            heading_size,
            heading_lines,
            content_lines,
            disclaimer: DISCLAIMER.to_string(),
            brand: BRAND.to_string(),
        }
    }
}

/// Split on embedded newlines, then greedily word-wrap each line to
/// `max_columns` characters. Blank input lines survive as empty output lines;
/// a single word longer than the budget keeps its own line unbroken.
fn wrap_text(text: &str, max_columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_columns = 0;
        for word in raw_line.split_whitespace() {
            let word_columns = word.chars().count();
            if current.is_empty() {
                current = word.to_string();
                current_columns = word_columns;
            } else if current_columns + 1 + word_columns <= max_columns {
                current.push(' ');
                current.push_str(word);
                current_columns += 1 + word_columns;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_columns = word_columns;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
