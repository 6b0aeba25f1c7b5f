//! Heading representation for tree-sitter parsed documents.
//!
//! A heading is the title of a section in a markdown document. Headings are derived from the
//! document text at load time and carry enough coordinates to point a reader back at the source.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Section title found in a document, with its nesting level and position.
pub struct Heading {
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// Heading text without markup symbols.
    pub title: String,
    /// Line of the heading marker (1-indexed).
    pub line: usize,
    /// Byte offset where the heading begins.
    #[serde(skip)]
    pub byte_start: usize,
    /// Byte offset where the heading ends.
    #[serde(skip)]
    pub byte_end: usize,
}
