//! Inline emphasis scanning for single lines of text.

use serde::{Deserialize, Serialize};

/// One styled run of text within a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    /// Literal text, displayed as-is.
    Text(String),
    /// Emphasized text that was delimited by `**...**`.
    Strong(String),
}

impl Span {
    /// The raw text carried by this span, regardless of styling.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) => s,
            Span::Strong(s) => s,
        }
    }
}

/// One rendered line: its spans in display order.
pub type Line = Vec<Span>;

/// Scan one line for `**...**` emphasis spans.
///
/// Runs a single left-to-right pass producing non-overlapping,
/// non-nested spans. An opening marker with no matching closer leaves
/// the remainder of the line literal, so malformed input degrades to
/// plain display instead of an error. Empty input yields no spans.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let close = match after_open.find("**") {
            Some(close) => close,
            None => {
                // Unpaired opener: everything left stays literal.
                spans.push(Span::Text(rest.to_string()));
                return spans;
            }
        };
        if open > 0 {
            spans.push(Span::Text(rest[..open].to_string()));
        }
        spans.push(Span::Strong(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(Span::Text(rest.to_string()));
    }
    spans
}

// =============================================================================
// Tests
// =============================================================================
