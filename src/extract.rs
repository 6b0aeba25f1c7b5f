//! Heading extraction from raw document text.
//!
//! The extractor owns one tree-sitter parser and one compiled query, so a whole run reuses them
//! across every document instead of recompiling the query per file.

use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::heading::Heading;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Parses document text and returns its headings in document order.
pub struct HeadingExtractor {
    format: Box<dyn Format>,
    parser: Parser,
    query: Query,
}

impl HeadingExtractor {
    /// Build an extractor for the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar is incompatible with the tree-sitter runtime or the
    /// format's heading query does not compile.
    pub fn new(format: Box<dyn Format>) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let query = Query::new(&language, format.heading_query())?;
        Ok(Self {
            format,
            parser,
            query,
        })
    }

    /// Build an extractor for markdown documents.
    ///
    /// # Errors
    ///
    /// See [`HeadingExtractor::new`].
    pub fn markdown() -> Result<Self> {
        Self::new(Box::new(MarkdownFormat))
    }

    /// Extract every heading in `text`, sorted by position.
    ///
    /// Returns `None` if the parser gives up on the input.
    pub fn extract(&mut self, text: &str) -> Option<Vec<Heading>> {
        let tree = self.parser.parse(text, None)?;
        let source = text.as_bytes();

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), source);

        let mut headings = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(heading) = self.format.read_heading(capture.node, source) {
                    headings.push(heading);
                }
            }
        }

        headings.sort_by_key(|h| h.byte_start);
        headings.dedup_by_key(|h| h.byte_start);
        Some(headings)
    }
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
