//! Markdown format implementation using tree-sitter-md.
//!
//! Both ATX-style (`#` syntax) and setext-style (underlined) headings are recognised. Because
//! headings come from the parse tree, `#` lines inside fenced code blocks are never mistaken for
//! headings.

use crate::formats::Format;
use crate::heading::Heading;
use tree_sitter::Node;

/// Tree-sitter queries for ATX and setext markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn read_heading(&self, node: Node<'_>, source: &[u8]) -> Option<Heading> {
        let mut level = None;
        let mut title = String::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "atx_h1_marker" | "setext_h1_underline" => level = Some(1),
                "atx_h2_marker" | "setext_h2_underline" => level = Some(2),
                "atx_h3_marker" => level = Some(3),
                "atx_h4_marker" => level = Some(4),
                "atx_h5_marker" => level = Some(5),
                "atx_h6_marker" => level = Some(6),
                "inline" | "paragraph" => {
                    title = normalise_title(child.utf8_text(source).ok()?);
                }
                _ => {}
            }
        }

        Some(Heading {
            level: level?,
            title,
            line: node.start_position().row + 1,
            byte_start: node.start_byte(),
            byte_end: node.end_byte(),
        })
    }
}

/// Collapse internal whitespace and drop an ATX closing sequence (`## Title ##`).
fn normalise_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().all(|c| c == '#') {
        return String::new();
    }
    match collapsed.rsplit_once(' ') {
        Some((head, tail)) if tail.chars().all(|c| c == '#') => head.trim_end().to_string(),
        _ => collapsed,
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
