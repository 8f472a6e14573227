//! Date normalization to the clearinghouse `YYYYMMDD` form.

use chrono::NaiveDate;
use nsc_model::{Advisory, AdvisoryKind, DateCell};

use crate::error::FormatError;

/// chrono format string for `YYYYMMDD`.
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

const COMPACT_DATE: &str = "YYYYMMDD";

pub fn format_compact(date: NaiveDate) -> String {
    date.format(COMPACT_DATE_FORMAT).to_string()
}

/// Strict `YYYYMMDD` parser: exactly eight digits forming a real calendar date.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nsc_normalization::parse_compact_date;
///
/// assert_eq!(
///     parse_compact_date("20200815").unwrap(),
///     NaiveDate::from_ymd_opt(2020, 8, 15).unwrap()
/// );
/// assert!(parse_compact_date("2020-08-15").is_err());
/// assert!(parse_compact_date("20200230").is_err());
/// ```
pub fn parse_compact_date(value: &str) -> Result<NaiveDate, FormatError> {
    let text = value.trim();
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(text, COMPACT_DATE));
    }
    NaiveDate::parse_from_str(text, COMPACT_DATE_FORMAT)
        .map_err(|_| FormatError::new(text, COMPACT_DATE))
}

/// Encode a tagged date cell as `YYYYMMDD`.
///
/// Typed dates are formatted directly, text must already be `YYYYMMDD`, and a
/// missing cell encodes as an empty string.
pub fn coerce_date_to_compact(cell: &DateCell) -> Result<String, FormatError> {
    match cell {
        DateCell::Date(date) => Ok(format_compact(*date)),
        DateCell::Text(text) => parse_compact_date(text).map(format_compact),
        DateCell::Missing => Ok(String::new()),
    }
}

/// Expand a partial search date to `YYYYMMDD`.
///
/// | input        | output     |
/// |--------------|------------|
/// | `YYYY`       | `YYYY0101` |
/// | `YYYYMM`     | `YYYYMM01` |
/// | `YYYY-MM`    | `YYYYMM01` |
/// | `YYYY-MM-DD` | `YYYYMMDD` |
///
/// `/` is accepted wherever `-` is. Anything else is returned unchanged with
/// no advisory.
pub fn expand_partial_search_date(input: &str) -> (String, Option<Advisory>) {
    let text = input.trim();
    let is_separator = |b: u8| b == b'-' || b == b'/';

    let expanded = if !text.is_ascii() {
        None
    } else {
        let bytes = text.as_bytes();
        match bytes.len() {
            4 => Some(format!("{text}0101")),
            6 => Some(format!("{text}01")),
            7 if is_separator(bytes[4]) => Some(format!("{}{}01", &text[..4], &text[5..])),
            10 if is_separator(bytes[4]) && is_separator(bytes[7]) => Some(format!(
                "{}{}{}",
                &text[..4],
                &text[5..7],
                &text[8..]
            )),
            _ => None,
        }
    };

    match expanded {
        Some(value) => {
            let advisory = Advisory::new(
                AdvisoryKind::SearchDateExpanded,
                format!("search date '{text}' expanded to '{value}'"),
            );
            (value, Some(advisory))
        }
        None => (input.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn coerces_typed_dates() {
        let cell = DateCell::Date(date(1998, 1, 5));
        assert_eq!(coerce_date_to_compact(&cell).unwrap(), "19980105");
    }

    #[test]
    fn coerces_conforming_text() {
        let cell = DateCell::Text(" 19980105 ".to_string());
        assert_eq!(coerce_date_to_compact(&cell).unwrap(), "19980105");
    }

    #[test]
    fn rejects_non_conforming_text() {
        let err = coerce_date_to_compact(&DateCell::Text("01/05/1998".into())).unwrap_err();
        assert_eq!(err.value, "01/05/1998");
        assert_eq!(err.expected, "YYYYMMDD");
    }

    #[test]
    fn missing_cell_is_empty() {
        assert_eq!(coerce_date_to_compact(&DateCell::Missing).unwrap(), "");
    }

    #[test]
    fn parse_rejects_wrong_width() {
        assert!(parse_compact_date("2020081").is_err());
        assert!(parse_compact_date("202008150").is_err());
        assert!(parse_compact_date("").is_err());
    }

    #[test]
    fn expansion_reports_an_informational_advisory() {
        let (value, advisory) = expand_partial_search_date("2021");
        assert_eq!(value, "20210101");
        let advisory = advisory.unwrap();
        assert_eq!(advisory.kind, AdvisoryKind::SearchDateExpanded);
        assert!(advisory.kind.is_informational());
    }

    #[test]
    fn full_dates_pass_through_silently() {
        assert_eq!(
            expand_partial_search_date("20200815"),
            ("20200815".to_string(), None)
        );
    }

    #[test]
    fn seven_characters_without_separator_pass_through() {
        assert_eq!(expand_partial_search_date("2020x08").1, None);
    }
}
