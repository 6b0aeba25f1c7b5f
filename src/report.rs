//! Validation report generation.
//!
//! Collects the verdict for every loaded document and every file that could not be read, and
//! renders them either as human-readable text for the terminal or as JSON for CI.

use crate::document::{relative_id, Document};
use crate::error::ReadError;
use crate::validate::{Verdict, Violation};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Process outcome derived from a report.
pub enum ExitStatus {
    /// Every document passed.
    Success,
    /// At least one document has a violation.
    Violations,
    /// At least one file could not be read, or the run was aborted.
    Unreadable,
}

impl ExitStatus {
    #[must_use]
    /// Process exit code: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Violations => 1,
            Self::Unreadable => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Per-document outcome.
pub enum Status {
    /// Loaded and no violations.
    Pass,
    /// Loaded with at least one violation.
    Fail,
    /// Could not be loaded.
    Unreadable,
}

#[derive(Clone, Debug, Serialize)]
/// Outcome for one document in the report.
pub struct DocumentReport {
    /// Document identifier, relative to the root.
    pub path: String,
    /// Whether it passed, failed, or could not be read.
    pub status: Status,
    /// Number of headings found.
    pub headings: usize,
    /// Violations recorded for the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    /// Read error message, for unreadable files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Summary counts of a report.
pub struct Summary {
    /// Number of documents seen, readable or not.
    pub total: usize,
    /// Documents with no violations.
    pub passed: usize,
    /// Documents with at least one violation.
    pub failed: usize,
    /// Files that could not be read.
    pub unreadable: usize,
}

#[derive(Clone, Debug, Serialize)]
/// Validation report covering one root directory.
pub struct Report {
    /// Root directory that was checked.
    pub root: String,
    #[serde(skip)]
    root_path: PathBuf,
    /// Per-document outcomes, in load order.
    pub documents: Vec<DocumentReport>,
}

impl Report {
    #[must_use]
    /// Start an empty report for `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.display().to_string(),
            root_path: root.to_path_buf(),
            documents: Vec::new(),
        }
    }

    #[must_use]
    /// Build a report from (document, verdict) pairs.
    pub fn from_pairs<'a, I>(root: &Path, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a Document, Verdict)>,
    {
        let mut report = Self::new(root);
        for (document, verdict) in pairs {
            report.record(document, verdict);
        }
        report
    }

    /// Record the verdict for a loaded document.
    pub fn record(&mut self, document: &Document, verdict: Verdict) {
        let status = if verdict.passed() {
            Status::Pass
        } else {
            Status::Fail
        };
        self.documents.push(DocumentReport {
            path: document.id().to_string(),
            status,
            headings: document.headings().len(),
            violations: verdict.violations,
            error: None,
        });
    }

    /// Record a file that could not be loaded.
    pub fn record_unreadable(&mut self, error: &ReadError) {
        let path = error.path().map_or_else(
            || "<unknown>".to_string(),
            |path| relative_id(&self.root_path, path),
        );
        self.documents.push(DocumentReport {
            path,
            status: Status::Unreadable,
            headings: 0,
            violations: Vec::new(),
            error: Some(error.to_string()),
        });
    }

    #[must_use]
    /// Count documents by status.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.documents.len(),
            ..Summary::default()
        };
        for document in &self.documents {
            match document.status {
                Status::Pass => summary.passed += 1,
                Status::Fail => summary.failed += 1,
                Status::Unreadable => summary.unreadable += 1,
            }
        }
        summary
    }

    #[must_use]
    /// Exit status for the run: unreadable files outrank violations.
    pub fn exit_status(&self) -> ExitStatus {
        let summary = self.summary();
        if summary.unreadable > 0 {
            ExitStatus::Unreadable
        } else if summary.failed > 0 {
            ExitStatus::Violations
        } else {
            ExitStatus::Success
        }
    }

    /// Write the human-readable report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    #[must_use]
    /// Render the human-readable report as a string.
    pub fn to_human_readable(&self) -> String {
        self.to_string()
    }

    /// Render the report, with its summary and exit status, as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Envelope<'a> {
            #[serde(flatten)]
            report: &'a Report,
            summary: Summary,
            exit_status: ExitStatus,
        }

        serde_json::to_string_pretty(&Envelope {
            report: self,
            summary: self.summary(),
            exit_status: self.exit_status(),
        })
    }
}

/// Human-readable rendering. Passing documents are counted but not listed.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        writeln!(
            f,
            "Checked {} document{} in {}",
            summary.total,
            if summary.total == 1 { "" } else { "s" },
            self.root
        )?;

        for document in &self.documents {
            match document.status {
                Status::Pass => {}
                Status::Fail => {
                    writeln!(f, "FAIL {}", document.path)?;
                    for violation in &document.violations {
                        writeln!(f, "  - {violation}")?;
                    }
                }
                Status::Unreadable => {
                    let message = document.error.as_deref().unwrap_or("unreadable");
                    writeln!(f, "ERROR {}: {message}", document.path)?;
                }
            }
        }

        writeln!(
            f,
            "{} passed, {} failed, {} unreadable",
            summary.passed, summary.failed, summary.unreadable
        )
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
