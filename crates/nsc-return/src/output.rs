//! Normalized output as CSV or as a DataFrame.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nsc_model::NormalizedEnrollmentRow;
use nsc_model::columns::{OUTPUT_COLUMNS, SEMESTERS_AT_INSTITUTION, TOTAL_ENROLLMENT_DAYS};
use polars::prelude::*;

use crate::error::Result;

/// Write the canonical header followed by one line per row.
///
/// The header is written even when there are no rows.
pub fn write_normalized_csv<W: Write>(rows: &[NormalizedEnrollmentRow], writer: W) -> Result<()> {
    let mut csv = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        csv.write_record(row.to_record())?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_normalized_file(rows: &[NormalizedEnrollmentRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_normalized_csv(rows, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Wrote normalized file");
    Ok(())
}

/// Build a DataFrame in canonical column order.
///
/// Semesters at Institution and Total Enrollment Days are `Int64`; every
/// other column is `String`.
pub fn normalized_frame(rows: &[NormalizedEnrollmentRow]) -> Result<DataFrame> {
    let records: Vec<Vec<String>> = rows.iter().map(NormalizedEnrollmentRow::to_record).collect();

    let columns: Vec<Column> = OUTPUT_COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, name)| match *name {
            SEMESTERS_AT_INSTITUTION => Column::new(
                (*name).into(),
                rows.iter()
                    .map(|row| row.semesters_at_institution)
                    .collect::<Vec<i64>>(),
            ),
            TOTAL_ENROLLMENT_DAYS => Column::new(
                (*name).into(),
                rows.iter()
                    .map(|row| row.total_enrollment_days)
                    .collect::<Vec<i64>>(),
            ),
            _ => Column::new(
                (*name).into(),
                records
                    .iter()
                    .map(|record| record[idx].clone())
                    .collect::<Vec<String>>(),
            ),
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> NormalizedEnrollmentRow {
        NormalizedEnrollmentRow {
            last_name: "Lee".into(),
            first_name: "Ann".into(),
            college_name: "Example College, Main Campus".into(),
            semesters_at_institution: 2,
            total_enrollment_days: 244,
            ..NormalizedEnrollmentRow::default()
        }
    }

    #[test]
    fn test_header_written_without_rows() {
        let mut buffer = Vec::new();
        write_normalized_csv(&[], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Last Name,First Name,Middle Initial,"));
        assert!(text.trim_end().ends_with("Degree Major 4,Degree CIP 4"));
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let mut buffer = Vec::new();
        write_normalized_csv(&[row()], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Example College, Main Campus\""));
    }

    #[test]
    fn test_frame_types() {
        let df = normalized_frame(&[row()]).unwrap();
        assert_eq!(df.width(), OUTPUT_COLUMNS.len());
        assert_eq!(df.height(), 1);
        assert_eq!(
            df.column(SEMESTERS_AT_INSTITUTION).unwrap().dtype(),
            &DataType::Int64
        );
        assert_eq!(df.column("Last Name").unwrap().dtype(), &DataType::String);
        assert_eq!(
            df.column(TOTAL_ENROLLMENT_DAYS).unwrap().get(0).unwrap(),
            AnyValue::Int64(244)
        );
    }
}
