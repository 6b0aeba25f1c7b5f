//! Lazy loading of the markdown documents under a root directory.
//!
//! Entries are visited depth-first and sorted by file name within each directory, so the same
//! tree always yields the same sequence. A file that cannot be loaded is yielded as an error and
//! iteration carries on with the next one. Dangling links are only errors when they carry a
//! document extension.

use crate::config::Config;
use crate::document::{relative_id, Document};
use crate::error::{Error, ReadError, Result};
use crate::extract::HeadingExtractor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Iterator over the documents found below a root directory.
pub struct DocumentLoader {
    root: PathBuf,
    extensions: Vec<String>,
    walker: walkdir::FilterEntry<walkdir::IntoIter, Box<dyn FnMut(&DirEntry) -> bool>>,
    extractor: HeadingExtractor,
}

impl DocumentLoader {
    /// Open `root` for loading with the extensions and walk options from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist, is not a directory, or cannot be listed, or if
    /// the markdown grammar fails to load.
    pub fn open(root: &Path, config: &Config) -> Result<Self> {
        let metadata = fs::metadata(root).map_err(|source| Error::RootInaccessible {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        fs::read_dir(root).map_err(|source| Error::RootInaccessible {
            path: root.to_path_buf(),
            source,
        })?;

        let include_hidden = config.include_hidden;
        let filter: Box<dyn FnMut(&DirEntry) -> bool> =
            Box::new(move |entry| include_hidden || entry.depth() == 0 || !is_hidden(entry));
        let walker = WalkDir::new(root)
            .follow_links(config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(filter);

        debug!(root = %root.display(), extensions = ?config.file_extensions, "opened document root");

        Ok(Self {
            root: root.to_path_buf(),
            extensions: config
                .file_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            walker,
            extractor: HeadingExtractor::markdown()?,
        })
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
    }

    fn load(&mut self, path: &Path) -> std::result::Result<Document, ReadError> {
        let bytes = fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| ReadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let id = relative_id(&self.root, path);
        Document::parse(id, path, text, &mut self.extractor)
    }
}

impl Iterator for DocumentLoader {
    type Item = std::result::Result<Document, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source.path().map(Path::to_path_buf);
                    if let Some(link) = path.as_deref() {
                        if source.loop_ancestor().is_none()
                            && is_dangling_link(link)
                            && !self.matches_extension(link)
                        {
                            debug!(path = %link.display(), "skipping dangling link");
                            continue;
                        }
                    }
                    return Some(Err(ReadError::Walk { path, source }));
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if !self.matches_extension(entry.path()) {
                trace!(path = %entry.path().display(), "skipping non-matching file");
                continue;
            }
            debug!(path = %entry.path().display(), "loading document");
            return Some(self.load(entry.path()));
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// A symlink whose target no longer exists.
fn is_dangling_link(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
        && fs::metadata(path).is_err()
}

#[cfg(test)]
#[path = "tests/loader.rs"]
mod tests;
