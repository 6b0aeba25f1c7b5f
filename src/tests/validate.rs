use super::{Rule, RuleSet, Validator, Verdict};
use crate::document::Document;
use crate::extract::HeadingExtractor;

fn doc(text: &str) -> Document {
    let mut extractor = HeadingExtractor::markdown().unwrap();
    Document::parse("doc.md", "doc.md", text, &mut extractor).unwrap()
}

fn verdict(text: &str, rules: RuleSet) -> Verdict {
    Validator::new(rules).validate(&doc(text))
}

fn default_verdict(text: &str) -> Verdict {
    verdict(text, RuleSet::default())
}

#[test]
fn test_valid_documents_pass() {
    let samples = [
        "# Title\nbody",
        "# Observer\n\nSubjects notify observers.\n\n## Example\n\ncode\n",
        "Factory\n=======\n\nCreates objects.\n",
        "### Deep first heading\n",
    ];
    for sample in samples {
        let v = default_verdict(sample);
        assert!(v.passed(), "{sample:?} should pass, got {:?}", v.violations);
    }
}

#[test]
fn test_zero_headings_reports_missing_heading() {
    let v = default_verdict("Just prose about the open/closed principle.\n");
    assert!(!v.passed());
    assert!(v.has(Rule::MissingHeading));
    assert!(!v.has(Rule::EmptyBody));
}

#[test]
fn test_whitespace_only_reports_empty_body() {
    for sample in ["", "   ", "\n\n\t \n"] {
        let v = default_verdict(sample);
        assert!(v.has(Rule::EmptyBody), "{sample:?} should be an empty body");
        assert!(v.has(Rule::MissingHeading));
    }
}

#[test]
fn test_disabled_rules_are_not_reported() {
    let rules: RuleSet = [Rule::EmptyBody].into_iter().collect();
    let v = verdict("no headings here\n", rules);
    assert!(v.passed());
}

#[test]
fn test_top_level_heading() {
    let rules: RuleSet = [Rule::TopLevelHeading].into_iter().collect();
    assert!(verdict("# Title\n\n## Sub\n", rules.clone()).passed());

    let v = verdict("## Sub first\n", rules.clone());
    assert!(v.has(Rule::TopLevelHeading));
    assert_eq!(v.violations[0].line, Some(1));

    // No headings at all is left to missing-heading.
    assert!(verdict("text\n", rules).passed());
}

#[test]
fn test_heading_increment() {
    let rules: RuleSet = [Rule::HeadingIncrement].into_iter().collect();
    assert!(verdict("# A\n## B\n### C\n# D\n### E\n", rules.clone()).has(Rule::HeadingIncrement));

    let v = verdict("# A\n\n### C\n\n## B\n\n#### D\n", rules.clone());
    assert_eq!(v.violations.len(), 2);
    assert_eq!(v.violations[0].line, Some(3));
    assert_eq!(v.violations[1].line, Some(7));

    assert!(verdict("# A\n## B\n### C\n## D\n# E\n", rules).passed());
}

#[test]
fn test_empty_heading() {
    let rules: RuleSet = [Rule::EmptyHeading].into_iter().collect();
    let v = verdict("# Title\n\n##\n\nbody\n", rules.clone());
    assert!(v.has(Rule::EmptyHeading));
    assert!(verdict("# Title\n", rules).passed());
}

#[test]
fn test_single_top_level() {
    let rules: RuleSet = [Rule::SingleTopLevel].into_iter().collect();
    let v = verdict("# One\n\n# Two\n\n# Three\n", rules.clone());
    assert_eq!(v.violations.len(), 2);
    assert!(v.violations.iter().all(|x| x.rule == Rule::SingleTopLevel));
    assert!(verdict("# One\n\n## Two\n", rules).passed());
}

#[test]
fn test_violations_follow_rule_order() {
    let v = verdict("", RuleSet::all());
    let rules: Vec<Rule> = v.violations.iter().map(|x| x.rule).collect();
    assert_eq!(rules, vec![Rule::MissingHeading, Rule::EmptyBody]);
}

#[test]
fn test_rule_names_round_trip() {
    for rule in Rule::ALL {
        assert_eq!(rule.name().parse::<Rule>().unwrap(), rule);
        assert_eq!(rule.to_string(), rule.name());
    }
    assert_eq!("Empty-Body".parse::<Rule>().unwrap(), Rule::EmptyBody);
    assert!("bogus".parse::<Rule>().is_err());
}

#[test]
fn test_rule_set_dedups_and_orders() {
    let rules: RuleSet = [Rule::SingleTopLevel, Rule::MissingHeading, Rule::SingleTopLevel]
        .into_iter()
        .collect();
    assert_eq!(
        rules.iter().collect::<Vec<_>>(),
        vec![Rule::MissingHeading, Rule::SingleTopLevel]
    );
    assert_eq!(RuleSet::all().len(), Rule::ALL.len());
}

#[test]
fn test_violation_display() {
    let rules: RuleSet = [Rule::HeadingIncrement, Rule::EmptyBody].into_iter().collect();
    let v = verdict("# A\n### B\n", rules);
    assert_eq!(
        v.violations[0].to_string(),
        "[heading-increment] line 2: heading `B` jumps from level 1 to level 3"
    );
    let v = default_verdict("");
    assert_eq!(v.violations[0].to_string(), "[missing-heading] document has no headings");
}
