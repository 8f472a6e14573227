//! Conversion of Polars cells into identity values.

use chrono::{DateTime, NaiveDate};
use nsc_model::DateCell;
use polars::prelude::*;

/// Days from 0001-01-01 (CE day 1) to the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Render a cell as text; null becomes `None`.
///
/// Floats are written without a trailing `.0` so identifiers read as
/// numbers keep their original digits.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Float32(v) => Some(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Some(format_numeric(v)),
        other => {
            let s = other.to_string();
            match s.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
                Some(inner) => Some(inner.to_string()),
                None => Some(s),
            }
        }
    }
}

/// Tag a date-like cell by its own type.
///
/// Date and datetime cells become [`DateCell::Date`]; anything else is kept
/// as text for later `YYYYMMDD` validation.
pub fn any_to_date_cell(value: AnyValue<'_>) -> DateCell {
    match value {
        AnyValue::Null => DateCell::Missing,
        AnyValue::Date(days) => days
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map_or_else(|| DateCell::Text(days.to_string()), DateCell::Date),
        AnyValue::Datetime(value, unit, _) => {
            let timestamp = match unit {
                TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
                TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
                TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
            };
            timestamp.map_or_else(
                || DateCell::Text(value.to_string()),
                |ts| DateCell::Date(ts.date_naive()),
            )
        }
        other => DateCell::from_text(any_to_text(other).as_deref()),
    }
}

fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cells() {
        assert_eq!(any_to_text(AnyValue::Null), None);
        assert_eq!(any_to_text(AnyValue::String("Ann")), Some("Ann".into()));
        assert_eq!(any_to_text(AnyValue::Int64(123)), Some("123".into()));
        assert_eq!(any_to_text(AnyValue::Float64(40.0)), Some("40".into()));
    }

    #[test]
    fn test_date_cells() {
        assert_eq!(
            any_to_date_cell(AnyValue::Date(18_489)),
            DateCell::Date(NaiveDate::from_ymd_opt(2020, 8, 15).unwrap())
        );
        assert_eq!(
            any_to_date_cell(AnyValue::String(" 20200815 ")),
            DateCell::Text("20200815".into())
        );
        assert_eq!(any_to_date_cell(AnyValue::String("  ")), DateCell::Missing);
        assert_eq!(any_to_date_cell(AnyValue::Null), DateCell::Missing);
    }

    #[test]
    fn test_datetime_cells_keep_the_calendar_day() {
        // 2020-08-15T13:30:00Z
        let millis = 1_597_498_200_000;
        assert_eq!(
            any_to_date_cell(AnyValue::Datetime(millis, TimeUnit::Milliseconds, None)),
            DateCell::Date(NaiveDate::from_ymd_opt(2020, 8, 15).unwrap())
        );
    }

    #[test]
    fn test_integer_dates_stay_text() {
        assert_eq!(
            any_to_date_cell(AnyValue::Int64(19_980_105)),
            DateCell::Text("19980105".into())
        );
    }
}
