//! Reader for the clearinghouse detail report.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use nsc_model::columns::{self, REQUIRED_RETURN_COLUMNS};
use nsc_model::{MajorCip, RawEnrollmentRow};
use nsc_normalization::parse_compact_date;
use serde::Deserialize;

use crate::error::{IngestError, Result, open_error};

/// One line of the detail report, as text.
///
/// Every column is optional so reports that omit degree or major columns
/// still load; [`REQUIRED_RETURN_COLUMNS`] is checked against the header
/// separately. Empty cells deserialize to `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DetailCsvRow {
    #[serde(rename = "Your Unique Identifier")]
    your_unique_identifier: Option<String>,
    #[serde(rename = "First Name")]
    first_name: Option<String>,
    #[serde(rename = "Middle Initial")]
    middle_initial: Option<String>,
    #[serde(rename = "Last Name")]
    last_name: Option<String>,
    #[serde(rename = "Name Suffix")]
    name_suffix: Option<String>,
    #[serde(rename = "Requester Return Field")]
    requester_return_field: Option<String>,
    #[serde(rename = "Record Found Y/N")]
    record_found: Option<String>,
    #[serde(rename = "Search Date")]
    search_date: Option<String>,
    #[serde(rename = "College Code/Branch")]
    college_code_branch: Option<String>,
    #[serde(rename = "College Name")]
    college_name: Option<String>,
    #[serde(rename = "College State")]
    college_state: Option<String>,
    #[serde(rename = "2-year / 4-year")]
    two_or_four_year: Option<String>,
    #[serde(rename = "Public / Private")]
    public_private: Option<String>,
    #[serde(rename = "Enrollment Begin")]
    enrollment_begin: Option<String>,
    #[serde(rename = "Enrollment End")]
    enrollment_end: Option<String>,
    #[serde(rename = "Enrollment Status")]
    enrollment_status: Option<String>,
    #[serde(rename = "Class Level")]
    class_level: Option<String>,
    #[serde(rename = "Enrollment Major 1")]
    enrollment_major_1: Option<String>,
    #[serde(rename = "Enrollment CIP 1")]
    enrollment_cip_1: Option<String>,
    #[serde(rename = "Enrollment Major 2")]
    enrollment_major_2: Option<String>,
    #[serde(rename = "Enrollment CIP 2")]
    enrollment_cip_2: Option<String>,
    #[serde(rename = "Graduated?")]
    graduated: Option<String>,
    #[serde(rename = "Graduation Date")]
    graduation_date: Option<String>,
    #[serde(rename = "Degree Title")]
    degree_title: Option<String>,
    #[serde(rename = "Degree Major 1")]
    degree_major_1: Option<String>,
    #[serde(rename = "Degree CIP 1")]
    degree_cip_1: Option<String>,
    #[serde(rename = "Degree Major 2")]
    degree_major_2: Option<String>,
    #[serde(rename = "Degree CIP 2")]
    degree_cip_2: Option<String>,
    #[serde(rename = "Degree Major 3")]
    degree_major_3: Option<String>,
    #[serde(rename = "Degree CIP 3")]
    degree_cip_3: Option<String>,
    #[serde(rename = "Degree Major 4")]
    degree_major_4: Option<String>,
    #[serde(rename = "Degree CIP 4")]
    degree_cip_4: Option<String>,
    #[serde(rename = "College Sequence")]
    college_sequence: Option<String>,
}

impl DetailCsvRow {
    fn into_raw(self, row: usize) -> Result<RawEnrollmentRow> {
        let enrollment_begin =
            parse_date_cell(self.enrollment_begin, row, columns::ENROLLMENT_BEGIN)?;
        let enrollment_end = parse_date_cell(self.enrollment_end, row, columns::ENROLLMENT_END)?;

        Ok(RawEnrollmentRow {
            your_unique_identifier: self.your_unique_identifier,
            first_name: self.first_name,
            middle_initial: self.middle_initial,
            last_name: self.last_name,
            name_suffix: self.name_suffix,
            requester_return_field: self.requester_return_field,
            record_found: self.record_found,
            search_date: self.search_date,
            college_code_branch: self.college_code_branch,
            college_name: self.college_name,
            college_state: self.college_state,
            two_or_four_year: self.two_or_four_year,
            public_private: self.public_private,
            enrollment_begin,
            enrollment_end,
            enrollment_status: self.enrollment_status,
            class_level: self.class_level,
            enrollment_majors: [
                MajorCip::new(self.enrollment_major_1, self.enrollment_cip_1),
                MajorCip::new(self.enrollment_major_2, self.enrollment_cip_2),
            ],
            graduated: self.graduated,
            graduation_date: self.graduation_date,
            degree_title: self.degree_title,
            degree_majors: [
                MajorCip::new(self.degree_major_1, self.degree_cip_1),
                MajorCip::new(self.degree_major_2, self.degree_cip_2),
                MajorCip::new(self.degree_major_3, self.degree_cip_3),
                MajorCip::new(self.degree_major_4, self.degree_cip_4),
            ],
            college_sequence: self.college_sequence,
        })
    }
}

fn parse_date_cell(
    value: Option<String>,
    row: usize,
    column: &'static str,
) -> Result<Option<NaiveDate>> {
    let Some(value) = value else {
        return Ok(None);
    };
    parse_compact_date(&value)
        .map(Some)
        .map_err(|_| IngestError::InvalidDate { row, column, value })
}

/// Read a detail report from disk.
pub fn read_return_file(path: &Path) -> Result<Vec<RawEnrollmentRow>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let rows = read_return_rows(file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Read detail report");
    Ok(rows)
}

/// Read a detail report from any reader.
///
/// Columns may appear in any order and unknown columns are ignored. Row
/// numbers in errors are 1-based data rows (the header is not counted).
pub fn read_return_rows<R: Read>(reader: R) -> Result<Vec<RawEnrollmentRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_RETURN_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { columns: missing });
    }

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<DetailCsvRow>().enumerate() {
        let raw = result?.into_raw(index + 1)?;
        rows.push(raw);
    }

    tracing::debug!(
        rows = rows.len(),
        found = rows.iter().filter(|r| r.is_record_found()).count(),
        "Parsed detail rows"
    );
    Ok(rows)
}
