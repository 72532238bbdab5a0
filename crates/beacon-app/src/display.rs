//! Terminal rendering of answer blocks and source identity.
//!
//! Output is plain text with ANSI bold for emphasis: headings become
//! underlined lines, lists become bullet rows, and each source row
//! shows its title, breadcrumb path, and raw link. The `--json` path
//! serializes the same data untouched for programmatic consumers.

use beacon_render::{Block, Line, Span};
use beacon_search::Source;
use beacon_sources::SourceIdentityResolver;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format rendered blocks for the terminal, blocks separated by a
/// blank line. Empty input produces an empty string.
pub fn render_answer(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format the numbered source list with breadcrumbs.
pub fn render_sources(sources: &[Source], resolver: &SourceIdentityResolver) -> String {
    let mut lines = vec!["Sources".to_string(), "-------".to_string()];
    for (index, source) in sources.iter().enumerate() {
        let breadcrumb = resolver.breadcrumb(&source.uri, &source.title);
        lines.push(format!("{:>2}. {}", index + 1, source.title));
        lines.push(format!("    {}", breadcrumb.parts().join(" › ")));
        lines.push(format!("    {}", source.uri));
    }
    lines.join("\n")
}

/// Build the `--json` output document: the query, the typed blocks,
/// and each source with its resolved breadcrumb and icon reference.
pub fn json_document(
    query: &str,
    blocks: &[Block],
    sources: &[Source],
    resolver: &SourceIdentityResolver,
) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "blocks": blocks,
        "sources": sources
            .iter()
            .map(|source| {
                serde_json::json!({
                    "title": source.title,
                    "uri": source.uri,
                    "breadcrumb": resolver.breadcrumb(&source.uri, &source.title),
                    "icon": resolver.icon(&source.uri),
                })
            })
            .collect::<Vec<_>>(),
    })
}

fn format_block(block: &Block) -> String {
    match block {
        Block::Heading1(text) => underline(text, '='),
        Block::Heading2(text) => underline(text, '-'),
        Block::Paragraph(lines) => lines
            .iter()
            .map(format_line)
            .collect::<Vec<_>>()
            .join("\n"),
        Block::UnorderedList(items) => items
            .iter()
            .map(|item| format!("• {}", format_line(item)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn underline(text: &str, rule: char) -> String {
    format!("{}\n{}", text, rule.to_string().repeat(text.chars().count()))
}

fn format_line(line: &Line) -> String {
    line.iter()
        .map(|span| match span {
            Span::Text(text) => text.clone(),
            Span::Strong(text) => format!("{}{}{}", BOLD, text, RESET),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text_line(s: &str) -> Line {
        vec![Span::Text(s.to_string())]
    }

    #[test]
    fn test_heading_underline_matches_length() {
        let out = render_answer(&[Block::Heading1("Results".to_string())]);
        assert_eq!(out, "Results\n=======");

        let out = render_answer(&[Block::Heading2("Why".to_string())]);
        assert_eq!(out, "Why\n---");
    }

    #[test]
    fn test_paragraph_lines_and_block_separation() {
        let blocks = vec![
            Block::Paragraph(vec![text_line("one"), text_line("two")]),
            Block::Paragraph(vec![text_line("three")]),
        ];
        assert_eq!(render_answer(&blocks), "one\ntwo\n\nthree");
    }

    #[test]
    fn test_list_items_get_bullets() {
        let blocks = vec![Block::UnorderedList(vec![
            text_line("first"),
            text_line("second"),
        ])];
        assert_eq!(render_answer(&blocks), "• first\n• second");
    }

    #[test]
    fn test_strong_spans_wrapped_in_ansi_bold() {
        let blocks = vec![Block::Paragraph(vec![vec![
            Span::Strong("key".to_string()),
            Span::Text(" point".to_string()),
        ]])];
        assert_eq!(render_answer(&blocks), "\x1b[1mkey\x1b[0m point");
    }

    #[test]
    fn test_empty_blocks_render_empty() {
        assert_eq!(render_answer(&[]), "");
    }

    #[test]
    fn test_source_rows_include_breadcrumb_and_link() {
        let resolver = SourceIdentityResolver::default();
        let sources = vec![Source::new(
            "https://www.example.com/a/b".to_string(),
            "Example Page".to_string(),
        )];
        let out = render_sources(&sources, &resolver);
        assert_eq!(
            out,
            "Sources\n-------\n 1. Example Page\n    example.com › a › b\n    https://www.example.com/a/b"
        );
    }

    #[test]
    fn test_redirect_source_row_uses_label_pair() {
        let resolver = SourceIdentityResolver::default();
        let sources = vec![Source::new(
            "https://vertexaisearch.cloud.google.com/grounding-api-redirect/q".to_string(),
            "Study Results - Nature".to_string(),
        )];
        let out = render_sources(&sources, &resolver);
        assert!(out.contains("vertex › Nature"));
    }

    #[test]
    fn test_json_document_shape() {
        let resolver = SourceIdentityResolver::default();
        let blocks = vec![Block::Heading2("Title".to_string())];
        let sources = vec![Source::new(
            "https://example.com/x".to_string(),
            "Example".to_string(),
        )];

        let doc = json_document("what is beacon", &blocks, &sources, &resolver);
        assert_eq!(doc["query"], "what is beacon");
        assert_eq!(doc["blocks"][0]["heading2"], "Title");
        assert_eq!(doc["sources"][0]["title"], "Example");
        assert_eq!(doc["sources"][0]["uri"], "https://example.com/x");
        assert_eq!(
            doc["sources"][0]["breadcrumb"]["segments"][0],
            "example.com"
        );
        assert!(doc["sources"][0]["icon"]["primary"]
            .as_str()
            .unwrap()
            .contains("favicons"));
    }
}
