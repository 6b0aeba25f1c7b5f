//! Markup formats that obelus can read headings from.
//!
//! A format supplies its tree-sitter grammar and a query that selects heading nodes, then turns
//! each selected node into a [`Heading`]. Markdown is the only format so far.

use crate::heading::Heading;
use tree_sitter::Node;

pub mod markdown;

/// Grammar and heading recognition for one markup format.
pub trait Format {
    /// Tree-sitter language used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;

    /// Query whose captures are the heading nodes of a document.
    fn heading_query(&self) -> &str;

    /// Decode a captured heading node into its level and title.
    ///
    /// Returns `None` for nodes that do not carry a recognisable heading level.
    fn read_heading(&self, node: Node<'_>, source: &[u8]) -> Option<Heading>;
}
