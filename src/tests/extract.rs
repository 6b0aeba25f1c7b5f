use super::HeadingExtractor;
use crate::heading::Heading;

fn headings(text: &str) -> Vec<Heading> {
    let mut extractor = HeadingExtractor::markdown().unwrap();
    extractor.extract(text).unwrap()
}

fn outline(text: &str) -> Vec<(usize, String)> {
    headings(text)
        .into_iter()
        .map(|h| (h.level, h.title))
        .collect()
}

#[test]
fn test_atx_levels_in_order() {
    let text = "# One\n\nA\n\n## Two\n\nB\n\n### Three\n\nC\n";
    assert_eq!(
        outline(text),
        vec![
            (1, "One".to_string()),
            (2, "Two".to_string()),
            (3, "Three".to_string()),
        ]
    );
}

#[test]
fn test_all_six_atx_levels() {
    let text = "# a\n## b\n### c\n#### d\n##### e\n###### f\n";
    let levels: Vec<usize> = headings(text).iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_line_numbers_are_one_indexed() {
    let found = headings("# Title\nbody\n\n## Next\n");
    assert_eq!(found[0].line, 1);
    assert_eq!(found[1].line, 4);
    assert!(found[0].byte_start < found[1].byte_start);
}

#[test]
fn test_setext_headings() {
    let text = "Observer\n========\n\nIntro text.\n\nSubject\n-------\n\nMore.\n";
    assert_eq!(
        outline(text),
        vec![(1, "Observer".to_string()), (2, "Subject".to_string())]
    );
}

#[test]
fn test_fenced_code_is_not_a_heading() {
    let text = "# Strategy\n\n```python\n# not a heading\nclass Context: pass\n```\n";
    assert_eq!(outline(text), vec![(1, "Strategy".to_string())]);
}

#[test]
fn test_closing_sequence_not_in_title() {
    assert_eq!(outline("## Decorator ##\n"), vec![(2, "Decorator".to_string())]);
}

#[test]
fn test_no_headings() {
    assert!(headings("just a paragraph\n\nand another\n").is_empty());
    assert!(headings("").is_empty());
}

#[test]
fn test_extractor_is_reusable() {
    let mut extractor = HeadingExtractor::markdown().unwrap();
    let first = extractor.extract("# A\n").unwrap();
    let second = extractor.extract("text only\n").unwrap();
    let third = extractor.extract("# A\n").unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(first, third);
}

#[test]
fn test_byte_range_covers_heading_source() {
    let text = "# Observer\n\nbody\n\n## Subject ##\n\nmore\n\nFactory\n=======\n";
    let expected = ["# Observer", "## Subject ##", "Factory\n======="];

    let found = headings(text);
    assert_eq!(found.len(), expected.len());
    for (heading, want) in found.iter().zip(expected) {
        let source = text[heading.byte_start..heading.byte_end].trim_end();
        assert_eq!(source, want, "byte range of `{}`", heading.title);
    }
}
