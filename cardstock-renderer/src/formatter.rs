//! Content formatter — pure text→markup transform with ordered highlight rules.
//!
//! Two-stage pipeline:
//!
//! 1. Scan the *raw* text with an ordered rule list and collect
//!    non-overlapping match spans (earlier rules win on overlap; within one
//!    rule, leftmost-first).
//! 2. Rebuild the output from XML-escaped segments, wrapping each matched
//!    span in its highlight `<tspan>` marker.
//!
//! Markers are inserted after escaping, so raw slide text can never corrupt
//! document structure and no rule ever matches across a marker boundary.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fill used for positive deltas and ticker symbols.
const POSITIVE_FILL: &str = "#00ff88";
/// Fill used for negative deltas.
const NEGATIVE_FILL: &str = "#ff6b6b";

/// Semantic category of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Positive,
    Negative,
}

impl Highlight {
    fn open_tag(self) -> String {
        let fill = match self {
            Highlight::Positive => POSITIVE_FILL,
            Highlight::Negative => NEGATIVE_FILL,
        };
        format!("<tspan fill=\"{fill}\" fill-opacity=\"1\" font-weight=\"600\">")
    }
}

struct HighlightRule {
    pattern: Regex,
    class: Highlight,
}

/// Ordered rule list. Tickers share the positive class with positive deltas;
/// that mirrors the source material's palette.
static RULES: Lazy<Vec<HighlightRule>> = Lazy::new(|| {
    let rule = |pattern: &str, class| HighlightRule {
        pattern: Regex::new(pattern).expect("highlight rule regex"),
        class,
    };
    vec![
        rule(r"\+[\d.]+%", Highlight::Positive),
        rule(r"-[\d.]+%", Highlight::Negative),
        rule(
            r"\b(?:SPY|QQQ|NVDA|TSLA|AMD|AAPL|AMZN|GOOGL|META|MSFT)\b",
            Highlight::Positive,
        ),
    ]
});

/// Escape text for interpolation into SVG markup.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Transform one line of raw content text into highlighted SVG markup.
///
/// Pure and total. Not idempotent: the output is markup, not raw text.
pub fn format_content(text: &str) -> String {
    // Collect claimed spans over the raw text, rule priority first.
    let mut spans: Vec<(usize, usize, Highlight)> = Vec::new();
    for rule in RULES.iter() {
        for m in rule.pattern.find_iter(text) {
            let claimed = spans
                .iter()
                .any(|&(start, end, _)| m.start() < end && start < m.end());
            if !claimed {
                spans.push((m.start(), m.end(), rule.class));
            }
        }
    }
    spans.sort_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(text.len() + 64);
    let mut cursor = 0;
    for (start, end, class) in spans {
        out.push_str(&escape_text(&text[cursor..start]));
        out.push_str(&class.open_tag());
        out.push_str(&escape_text(&text[start..end]));
        out.push_str("</tspan>");
        cursor = end;
    }
    out.push_str(&escape_text(&text[cursor..]));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
