//! Block-level classification of generated answer text.

use serde::{Deserialize, Serialize};

use crate::inline::{parse_inline, Line};

/// One presentational block of a rendered answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// Top-level heading (`# ` prefix); text is the first line only.
    Heading1(String),
    /// Section heading (`## ` prefix); text is the first line only.
    Heading2(String),
    /// Free prose, one entry per source line so line breaks survive.
    Paragraph(Vec<Line>),
    /// Bulleted list (`* ` or `- ` prefix), one entry per source line.
    UnorderedList(Vec<Line>),
}

/// Render loosely structured answer text into typed blocks.
///
/// Line endings are normalized, then the text is split into blocks on
/// blank lines. Each non-empty block is classified wholesale by its
/// first line: list marker, heading marker, or plain paragraph. Blocks
/// keep their input order; blank blocks produce no output at all.
pub fn render(text: &str) -> Vec<Block> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .filter_map(|raw| {
            let block = raw.trim();
            if block.is_empty() {
                None
            } else {
                Some(classify(block))
            }
        })
        .collect()
}

/// Classify one trimmed, non-empty block by its leading prefix.
///
/// Rules are checked in priority order: list markers win over heading
/// markers, and anything unrecognized falls through to a paragraph.
fn classify(block: &str) -> Block {
    if block.starts_with("* ") || block.starts_with("- ") {
        let items = block.split('\n').map(list_item).collect();
        return Block::UnorderedList(items);
    }
    if let Some(rest) = block.strip_prefix("## ") {
        return Block::Heading2(first_line(rest));
    }
    if let Some(rest) = block.strip_prefix("# ") {
        return Block::Heading1(first_line(rest));
    }
    let lines = block.split('\n').map(parse_inline).collect();
    Block::Paragraph(lines)
}

fn first_line(text: &str) -> String {
    text.split('\n').next().unwrap_or_default().to_string()
}

/// Strip a line's leading marker, up through the first space.
///
/// Lines without any space are kept whole, so a stray unmarked line
/// inside a list block still renders as an item rather than vanishing.
fn list_item(line: &str) -> Line {
    let content = match line.find(' ') {
        Some(idx) => &line[idx + 1..],
        None => line,
    };
    parse_inline(content)
}

// =============================================================================
// Tests
// =============================================================================
