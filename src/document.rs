//! Loaded documents and their derived outline.
//!
//! A `Document` is created once, from the text read off disk, and never mutated afterwards. Its
//! headings are extracted at the same moment, so they always describe the text it holds.

use crate::error::ReadError;
use crate::extract::HeadingExtractor;
use crate::heading::Heading;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
/// One markdown file with its raw text and extracted headings.
pub struct Document {
    id: String,
    path: PathBuf,
    text: String,
    headings: Vec<Heading>,
}

impl Document {
    /// Parse `text` into a document identified by `id`, located at `path`.
    ///
    /// A leading byte-order mark is dropped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Parse`] if the parser produces no tree.
    pub fn parse(
        id: impl Into<String>,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        extractor: &mut HeadingExtractor,
    ) -> Result<Self, ReadError> {
        let path = path.into();
        let mut text = text.into();
        if text.starts_with('\u{feff}') {
            text.replace_range(..'\u{feff}'.len_utf8(), "");
        }
        let Some(headings) = extractor.extract(&text) else {
            return Err(ReadError::Parse { path });
        };
        Ok(Self {
            id: id.into(),
            path,
            text,
            headings,
        })
    }

    #[must_use]
    /// Identifier of the document: its path relative to the loader root, `/`-separated.
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    /// Filesystem path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    /// Raw text as loaded.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// Headings in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    #[must_use]
    /// True if the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Path of `path` relative to `root`, with `/` separators on every platform.
pub(crate) fn relative_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
