//! The check pipeline: load every document under a root, validate it, and report.

use crate::config::Config;
use crate::error::Result;
use crate::loader::DocumentLoader;
use crate::report::Report;
use crate::validate::{RuleSet, Validator};
use std::path::Path;
use tracing::{debug, info, warn};

/// Check every document under `root` using the rules and walk options in `config`.
///
/// Files that cannot be read are recorded in the report and do not stop the run.
///
/// # Errors
///
/// Returns an error if a configured rule name is unknown, or if the root cannot be opened.
pub fn check(root: &Path, config: &Config) -> Result<Report> {
    let rules = config.rule_set()?;
    check_with(root, config, rules)
}

/// Check every document under `root` against an explicit rule set.
///
/// # Errors
///
/// Returns an error if the root cannot be opened.
pub fn check_with(root: &Path, config: &Config, rules: RuleSet) -> Result<Report> {
    let loader = DocumentLoader::open(root, config)?;
    let validator = Validator::new(rules);
    let mut report = Report::new(root);

    for loaded in loader {
        match loaded {
            Ok(document) => {
                let verdict = validator.validate(&document);
                debug!(
                    document = document.id(),
                    headings = document.headings().len(),
                    violations = verdict.violations.len(),
                    "validated"
                );
                report.record(&document, verdict);
            }
            Err(err) => {
                warn!(%err, "skipping unreadable document");
                report.record_unreadable(&err);
            }
        }
    }

    let summary = report.summary();
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        unreadable = summary.unreadable,
        "check complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "tests/check.rs"]
mod tests;
