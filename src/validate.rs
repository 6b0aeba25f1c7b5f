//! Structural rules and the validator that applies them to a document.
//!
//! The policy is a fixed, enumerated set of rules. A run picks which of them are enabled; nothing
//! else about a rule is configurable. Validation is a pure function of the document's text and
//! headings.

use crate::document::Document;
use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// One structural rule a document can be checked against.
pub enum Rule {
    /// The document must contain at least one heading.
    MissingHeading,
    /// The document must not be empty or whitespace only.
    EmptyBody,
    /// The first heading must be a level 1 heading.
    TopLevelHeading,
    /// A heading may be at most one level deeper than the heading before it.
    HeadingIncrement,
    /// Every heading must have a title.
    EmptyHeading,
    /// At most one level 1 heading per document.
    SingleTopLevel,
}

impl Rule {
    /// Every rule, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::MissingHeading,
        Self::EmptyBody,
        Self::TopLevelHeading,
        Self::HeadingIncrement,
        Self::EmptyHeading,
        Self::SingleTopLevel,
    ];

    #[must_use]
    /// Name used in configuration, on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::MissingHeading => "missing-heading",
            Self::EmptyBody => "empty-body",
            Self::TopLevelHeading => "top-level-heading",
            Self::HeadingIncrement => "heading-increment",
            Self::EmptyHeading => "empty-heading",
            Self::SingleTopLevel => "single-top-level",
        }
    }

    fn check(self, document: &Document, violations: &mut Vec<Violation>) {
        let headings = document.headings();
        match self {
            Self::MissingHeading => {
                if headings.is_empty() {
                    violations.push(Violation::new(self, "document has no headings", None));
                }
            }
            Self::EmptyBody => {
                if document.is_blank() {
                    violations.push(Violation::new(self, "document body is empty", None));
                }
            }
            Self::TopLevelHeading => {
                if let Some(first) = headings.first().filter(|h| h.level != 1) {
                    violations.push(Violation::new(
                        self,
                        format!(
                            "first heading `{}` is level {}, expected level 1",
                            first.title, first.level
                        ),
                        Some(first.line),
                    ));
                }
            }
            Self::HeadingIncrement => {
                for pair in headings.windows(2) {
                    let (prev, next) = (&pair[0], &pair[1]);
                    if next.level > prev.level + 1 {
                        violations.push(Violation::new(
                            self,
                            format!(
                                "heading `{}` jumps from level {} to level {}",
                                next.title, prev.level, next.level
                            ),
                            Some(next.line),
                        ));
                    }
                }
            }
            Self::EmptyHeading => {
                for heading in headings.iter().filter(|h| h.title.is_empty()) {
                    violations.push(Violation::new(
                        self,
                        format!("level {} heading has no title", heading.level),
                        Some(heading.line),
                    ));
                }
            }
            Self::SingleTopLevel => {
                for heading in headings.iter().filter(|h| h.level == 1).skip(1) {
                    violations.push(Violation::new(
                        self,
                        format!("additional level 1 heading `{}`", heading.title),
                        Some(heading.line),
                    ));
                }
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownRule(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The enabled rules of a run, deduplicated and in [`Rule::ALL`] order.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    /// A set with every rule enabled.
    pub fn all() -> Self {
        Rule::ALL.into_iter().collect()
    }

    #[must_use]
    /// True if `rule` is enabled.
    pub fn contains(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    /// Iterate over the enabled rules.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.iter().copied()
    }

    #[must_use]
    /// Number of enabled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    /// True if no rule is enabled.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        [Rule::MissingHeading, Rule::EmptyBody].into_iter().collect()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut rules: Vec<Rule> = iter.into_iter().collect();
        rules.sort_unstable();
        rules.dedup();
        Self { rules }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A recorded structural rule failure for a document.
pub struct Violation {
    /// Rule that failed.
    pub rule: Rule,
    /// Human-readable description of the failure.
    pub message: String,
    /// Line the failure points at (1-indexed), for heading-level rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Violation {
    fn new(rule: Rule, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            rule,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {line}: {}", self.rule, self.message),
            None => write!(f, "[{}] {}", self.rule, self.message),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Outcome of validating one document.
pub struct Verdict {
    /// Violations in rule order, then document order.
    pub violations: Vec<Violation>,
}

impl Verdict {
    #[must_use]
    /// True if the document has no violations.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    /// True if some violation was recorded for `rule`.
    pub fn has(&self, rule: Rule) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }
}

/// Applies an enabled rule set to documents.
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    #[must_use]
    /// Create a validator enforcing `rules`.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    /// Check `document` against every enabled rule.
    pub fn validate(&self, document: &Document) -> Verdict {
        let mut violations = Vec::new();
        for rule in self.rules.iter() {
            rule.check(document, &mut violations);
        }
        Verdict { violations }
    }
}

#[cfg(test)]
#[path = "tests/validate.rs"]
mod tests;
