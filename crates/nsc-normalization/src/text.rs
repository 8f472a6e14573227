//! Text field normalization.
//!
//! The clearinghouse accepts 7-bit ASCII only in name fields, with fixed
//! maximum widths. Values are trimmed before truncation so leading blanks do
//! not eat into the width, and trimmed again afterwards so the result never
//! ends in a blank left behind by the cut. Control characters become blanks
//! first, so a value never spans more than one field of a tab-separated
//! line. Both functions are idempotent.

/// Drop every character outside 7-bit ASCII, keeping the rest in order.
///
/// # Examples
///
/// ```
/// use nsc_normalization::ascii_only;
///
/// assert_eq!(ascii_only("José"), "Jos");
/// assert_eq!(ascii_only("Zoë Ann"), "Zo Ann");
/// ```
pub fn ascii_only(value: &str) -> String {
    value.chars().filter(char::is_ascii).collect()
}

/// Replace every ASCII control character (tab, CR, LF and the rest) with a
/// blank.
///
/// # Examples
///
/// ```
/// use nsc_normalization::single_line;
///
/// assert_eq!(single_line("Ann\tMarie"), "Ann Marie");
/// assert_eq!(single_line("ID1\r\nID2"), "ID1  ID2");
/// ```
pub fn single_line(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_control() { ' ' } else { c })
        .collect()
}

/// Flatten control characters, trim, then keep at most `max_len` characters.
///
/// Returns an empty string for `None`.
pub fn truncate_trim(value: Option<&str>, max_len: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let truncated: String = single_line(value).trim().chars().take(max_len).collect();
    truncated.trim_end().to_string()
}

/// Flatten control characters, trim, keep at most `max_len` characters, then
/// drop non-ASCII characters.
///
/// # Examples
///
/// ```
/// use nsc_normalization::truncate_trim_ascii;
///
/// assert_eq!(truncate_trim_ascii(Some("  Renée  "), 20), "Rene");
/// assert_eq!(truncate_trim_ascii(Some("Maximilian"), 3), "Max");
/// assert_eq!(truncate_trim_ascii(None, 5), "");
/// ```
pub fn truncate_trim_ascii(value: Option<&str>, max_len: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let truncated: String = single_line(value).trim().chars().take(max_len).collect();
    ascii_only(&truncated).trim().to_string()
}
