use super::normalise_title;

#[test]
fn test_title_whitespace_collapsed() {
    assert_eq!(normalise_title("  Hello   world \n"), "Hello world");
}

#[test]
fn test_closing_sequence_dropped() {
    assert_eq!(normalise_title("Title ##"), "Title");
    assert_eq!(normalise_title("Title #"), "Title");
}

#[test]
fn test_hash_inside_word_kept() {
    assert_eq!(normalise_title("Learning C#"), "Learning C#");
}

#[test]
fn test_only_hashes_is_empty() {
    assert_eq!(normalise_title("###"), "");
    assert_eq!(normalise_title(""), "");
}
