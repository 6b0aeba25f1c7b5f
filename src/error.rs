//! Error types for loading, configuring and checking documents.
//!
//! Only [`Error`] aborts a run. A [`ReadError`] concerns one file and is reported alongside the
//! verdicts of the documents that did load.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for operations that can abort a run.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that stop a check before or while it starts.
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory is missing or cannot be listed.
    #[error("cannot access root directory {}: {source}", path.display())]
    RootInaccessible {
        /// Root directory given to the loader.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The root exists but is a file or something else that cannot be walked.
    #[error("root {} is not a directory", path.display())]
    NotADirectory {
        /// Root path given to the loader.
        path: PathBuf,
    },

    /// Configuration could not be read or names an unknown rule.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The tree-sitter grammar is incompatible with the linked runtime.
    #[error("incompatible grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The heading query does not compile against the grammar.
    #[error("invalid heading query: {0}")]
    Query(#[from] tree_sitter::QueryError),
}

/// A single file that could not be turned into a document.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The file contents are not valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        /// File that failed.
        path: PathBuf,
        /// Position of the first invalid byte sequence.
        source: std::string::FromUtf8Error,
    },

    /// The parser produced no tree for the file.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
    },

    /// A directory entry could not be visited while walking the root.
    #[error("failed to walk directory tree: {source}")]
    Walk {
        /// Entry being visited, when walkdir knows it.
        path: Option<PathBuf>,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
}

impl ReadError {
    /// Path of the file or directory the error refers to, if known.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } | Self::Parse { path } => Some(path),
            Self::Walk { path, .. } => path.as_deref(),
        }
    }
}

/// Problems with `obelus.toml` or rule selection.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("failed to parse config {}: {message}", path.display())]
    Parse {
        /// Configuration file path.
        path: PathBuf,
        /// Deserializer message.
        message: String,
    },

    /// A rule name that is not one of [`crate::validate::Rule::ALL`].
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
}
