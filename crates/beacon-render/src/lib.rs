//! Lightweight markup renderer for generated answer text.
//!
//! Splits loosely structured prose into typed presentation blocks
//! (headings, paragraphs, bulleted lists) and scans paragraph lines
//! and list items for `**...**` emphasis spans. The renderer treats
//! all input as untrusted display text: malformed markup degrades to
//! literal output, never to an error.

pub mod inline;
pub mod markup;

pub use inline::{parse_inline, Line, Span};
pub use markup::{render, Block};
