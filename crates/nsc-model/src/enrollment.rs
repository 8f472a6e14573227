//! Enrollment rows as reported by the clearinghouse and as normalized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A major name with its CIP code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorCip {
    pub major: Option<String>,
    pub cip: Option<String>,
}

impl MajorCip {
    pub fn new(major: Option<String>, cip: Option<String>) -> Self {
        Self { major, cip }
    }
}

/// One reported semester at one institution for one student.
///
/// Text cells are `None` when the report left them empty. Enrollment dates
/// are parsed from `YYYYMMDD` at ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnrollmentRow {
    pub your_unique_identifier: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub name_suffix: Option<String>,
    pub requester_return_field: Option<String>,
    pub record_found: Option<String>,
    pub search_date: Option<String>,
    pub college_code_branch: Option<String>,
    pub college_name: Option<String>,
    pub college_state: Option<String>,
    pub two_or_four_year: Option<String>,
    pub public_private: Option<String>,
    pub enrollment_begin: Option<NaiveDate>,
    pub enrollment_end: Option<NaiveDate>,
    pub enrollment_status: Option<String>,
    pub class_level: Option<String>,
    pub enrollment_majors: [MajorCip; 2],
    pub graduated: Option<String>,
    pub graduation_date: Option<String>,
    pub degree_title: Option<String>,
    pub degree_majors: [MajorCip; 4],
    pub college_sequence: Option<String>,
}

impl RawEnrollmentRow {
    /// `Record Found Y/N` is `Y`.
    pub fn is_record_found(&self) -> bool {
        flag_is_yes(self.record_found.as_deref())
    }

    /// `Graduated?` is `Y`.
    pub fn is_graduated(&self) -> bool {
        flag_is_yes(self.graduated.as_deref())
    }

    /// Days between enrollment begin and end, when both are reported.
    pub fn enrollment_days(&self) -> Option<i64> {
        match (self.enrollment_begin, self.enrollment_end) {
            (Some(begin), Some(end)) => Some((end - begin).num_days()),
            _ => None,
        }
    }
}

fn flag_is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|flag| flag.trim().eq_ignore_ascii_case("Y"))
}

/// Degree details for one (student, college sequence) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraduationFact {
    pub last_name: String,
    pub first_name: String,
    pub middle_initial: String,
    pub name_suffix: String,
    pub college_sequence: Option<String>,
    pub graduation_date: Option<String>,
    pub degree_title: Option<String>,
    pub degree_majors: [MajorCip; 4],
}

/// One output row, in canonical column order.
///
/// Field order matches [`crate::columns::OUTPUT_COLUMNS`]; the serde names
/// are the output header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEnrollmentRow {
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Middle Initial")]
    pub middle_initial: String,
    #[serde(rename = "Name Suffix")]
    pub name_suffix: String,
    #[serde(rename = "Requester Return Field")]
    pub requester_return_field: String,
    #[serde(rename = "Record Found Y/N")]
    pub record_found: String,
    #[serde(rename = "Search Date")]
    pub search_date: String,
    #[serde(rename = "College Sequence")]
    pub college_sequence: String,
    #[serde(rename = "College Code/Branch")]
    pub college_code_branch: String,
    #[serde(rename = "College Name")]
    pub college_name: String,
    #[serde(rename = "College State")]
    pub college_state: String,
    #[serde(rename = "2-year / 4-year")]
    pub two_or_four_year: String,
    #[serde(rename = "Public / Private")]
    pub public_private: String,
    #[serde(rename = "Enrollment Begin")]
    pub enrollment_begin: String,
    #[serde(rename = "Enrollment End")]
    pub enrollment_end: String,
    #[serde(rename = "Enrollment Status")]
    pub enrollment_status: String,
    #[serde(rename = "Class Level")]
    pub class_level: String,
    #[serde(rename = "Enrollment Major 1")]
    pub enrollment_major_1: String,
    #[serde(rename = "Enrollment CIP 1")]
    pub enrollment_cip_1: String,
    #[serde(rename = "Enrollment Major 2")]
    pub enrollment_major_2: String,
    #[serde(rename = "Enrollment CIP 2")]
    pub enrollment_cip_2: String,
    #[serde(rename = "Last Enrollment Major 1")]
    pub last_enrollment_major_1: String,
    #[serde(rename = "Last Enrollment CIP 1")]
    pub last_enrollment_cip_1: String,
    #[serde(rename = "Last Enrollment Major 2")]
    pub last_enrollment_major_2: String,
    #[serde(rename = "Last Enrollment CIP 2")]
    pub last_enrollment_cip_2: String,
    #[serde(rename = "Semesters at Institution")]
    pub semesters_at_institution: i64,
    #[serde(rename = "Total Enrollment Days")]
    pub total_enrollment_days: i64,
    #[serde(rename = "Graduated?")]
    pub graduated: String,
    #[serde(rename = "Graduation Date")]
    pub graduation_date: String,
    #[serde(rename = "Degree Title")]
    pub degree_title: String,
    #[serde(rename = "Degree Major 1")]
    pub degree_major_1: String,
    #[serde(rename = "Degree CIP 1")]
    pub degree_cip_1: String,
    #[serde(rename = "Degree Major 2")]
    pub degree_major_2: String,
    #[serde(rename = "Degree CIP 2")]
    pub degree_cip_2: String,
    #[serde(rename = "Degree Major 3")]
    pub degree_major_3: String,
    #[serde(rename = "Degree CIP 3")]
    pub degree_cip_3: String,
    #[serde(rename = "Degree Major 4")]
    pub degree_major_4: String,
    #[serde(rename = "Degree CIP 4")]
    pub degree_cip_4: String,
}

impl NormalizedEnrollmentRow {
    /// Cell values as text, in canonical column order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.last_name.clone(),
            self.first_name.clone(),
            self.middle_initial.clone(),
            self.name_suffix.clone(),
            self.requester_return_field.clone(),
            self.record_found.clone(),
            self.search_date.clone(),
            self.college_sequence.clone(),
            self.college_code_branch.clone(),
            self.college_name.clone(),
            self.college_state.clone(),
            self.two_or_four_year.clone(),
            self.public_private.clone(),
            self.enrollment_begin.clone(),
            self.enrollment_end.clone(),
            self.enrollment_status.clone(),
            self.class_level.clone(),
            self.enrollment_major_1.clone(),
            self.enrollment_cip_1.clone(),
            self.enrollment_major_2.clone(),
            self.enrollment_cip_2.clone(),
            self.last_enrollment_major_1.clone(),
            self.last_enrollment_cip_1.clone(),
            self.last_enrollment_major_2.clone(),
            self.last_enrollment_cip_2.clone(),
            self.semesters_at_institution.to_string(),
            self.total_enrollment_days.to_string(),
            self.graduated.clone(),
            self.graduation_date.clone(),
            self.degree_title.clone(),
            self.degree_major_1.clone(),
            self.degree_cip_1.clone(),
            self.degree_major_2.clone(),
            self.degree_cip_2.clone(),
            self.degree_major_3.clone(),
            self.degree_cip_3.clone(),
            self.degree_major_4.clone(),
            self.degree_cip_4.clone(),
        ]
    }

    /// Attach degree details, or mark the row as not graduated.
    pub fn apply_graduation(&mut self, fact: Option<&GraduationFact>) {
        let Some(fact) = fact else {
            self.graduated = "N".to_string();
            return;
        };
        self.graduated = "Y".to_string();
        self.graduation_date = fact.graduation_date.clone().unwrap_or_default();
        self.degree_title = fact.degree_title.clone().unwrap_or_default();
        let [first, second, third, fourth] = &fact.degree_majors;
        self.degree_major_1 = first.major.clone().unwrap_or_default();
        self.degree_cip_1 = first.cip.clone().unwrap_or_default();
        self.degree_major_2 = second.major.clone().unwrap_or_default();
        self.degree_cip_2 = second.cip.clone().unwrap_or_default();
        self.degree_major_3 = third.major.clone().unwrap_or_default();
        self.degree_cip_3 = third.cip.clone().unwrap_or_default();
        self.degree_major_4 = fourth.major.clone().unwrap_or_default();
        self.degree_cip_4 = fourth.cip.clone().unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::OUTPUT_COLUMNS;

    #[test]
    fn record_matches_output_width() {
        let row = NormalizedEnrollmentRow::default();
        assert_eq!(row.to_record().len(), OUTPUT_COLUMNS.len());
    }

    #[test]
    fn enrollment_days_requires_both_dates() {
        let mut row = RawEnrollmentRow {
            enrollment_begin: NaiveDate::from_ymd_opt(2020, 8, 15),
            ..RawEnrollmentRow::default()
        };
        assert_eq!(row.enrollment_days(), None);
        row.enrollment_end = NaiveDate::from_ymd_opt(2020, 12, 15);
        assert_eq!(row.enrollment_days(), Some(122));
    }

    #[test]
    fn flags_accept_lowercase() {
        let row = RawEnrollmentRow {
            record_found: Some("y".to_string()),
            graduated: Some(" N ".to_string()),
            ..RawEnrollmentRow::default()
        };
        assert!(row.is_record_found());
        assert!(!row.is_graduated());
    }
}
