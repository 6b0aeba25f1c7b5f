//! obelus: structural checks for directories of markdown documents.
//!
//! Documents are loaded lazily from a root directory, their headings are extracted with
//! tree-sitter, and each one is validated against an enumerated set of [`validate::Rule`]s.
//! The resulting [`report::Report`] renders as text or JSON and yields the process exit status.
#![allow(clippy::multiple_crate_versions)]

pub mod check;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod formats;
pub mod heading;
pub mod loader;
pub mod logging;
pub mod report;
pub mod validate;

pub use check::check;
pub use error::{Error, ReadError, Result};
