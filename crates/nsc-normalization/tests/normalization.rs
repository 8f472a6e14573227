use nsc_normalization::{ascii_only, expand_partial_search_date, truncate_trim, truncate_trim_ascii};
use proptest::prelude::*;

#[test]
fn expands_partial_search_dates() {
    let cases = [
        ("2020", "20200101"),
        ("202008", "20200801"),
        ("2020-08", "20200801"),
        ("2020/08", "20200801"),
        ("2020-08-15", "20200815"),
        ("2020/08/15", "20200815"),
    ];
    for (input, expected) in cases {
        let (value, advisory) = expand_partial_search_date(input);
        assert_eq!(value, expected, "input {input}");
        assert!(advisory.is_some(), "input {input}");
    }
}

#[test]
fn long_first_name_is_cut_at_twenty_characters() {
    let name = "FN3 This is really long and should be truncated";
    assert_eq!(truncate_trim_ascii(Some(name), 20), "FN3 This is really l");
}

#[test]
fn missing_values_normalize_to_empty() {
    assert_eq!(truncate_trim(None, 50), "");
    assert_eq!(truncate_trim_ascii(Some("   "), 20), "");
    assert_eq!(truncate_trim_ascii(Some("ééé"), 20), "");
}

proptest! {
    #[test]
    fn truncate_trim_ascii_is_idempotent(value in "\\PC{0,40}", max_len in 0usize..30) {
        let once = truncate_trim_ascii(Some(&value), max_len);
        let twice = truncate_trim_ascii(Some(&once), max_len);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn truncate_trim_is_idempotent(value in "\\PC{0,40}", max_len in 0usize..30) {
        let once = truncate_trim(Some(&value), max_len);
        let twice = truncate_trim(Some(&once), max_len);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_ascii_and_within_width(value in "\\PC{0,40}", max_len in 0usize..30) {
        let out = truncate_trim_ascii(Some(&value), max_len);
        prop_assert!(out.is_ascii());
        prop_assert!(out.chars().count() <= max_len);
    }

    #[test]
    fn output_has_no_field_breaks(value in "[a-z\t\r\n ]{0,40}", max_len in 0usize..30) {
        let out = truncate_trim(Some(&value), max_len);
        prop_assert!(!out.contains(['\t', '\r', '\n']));
    }

    #[test]
    fn ascii_filter_preserves_order(value in "\\PC{0,40}") {
        let filtered = ascii_only(&value);
        let expected: Vec<char> = value.chars().filter(char::is_ascii).collect();
        prop_assert_eq!(filtered.chars().collect::<Vec<_>>(), expected);
    }
}
