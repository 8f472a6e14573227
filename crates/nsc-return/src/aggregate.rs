//! Semester rows to enrollment periods.
//!
//! Stages, in order:
//!
//! 1. Split rows into found (`Record Found Y/N` = `Y`) and no-activity.
//! 2. Pull graduated rows out of the found rows as [`GraduationFact`]s.
//! 3. Forward-fill College Sequence within (student, requester return
//!    field, enrollment begin), in input order.
//! 4. Group by (student, requester return field, College Sequence) and
//!    aggregate each group into one period row.
//! 5. Append no-activity rows, left-join graduation facts onto the period
//!    rows by (student, College Sequence), and sort.
//!
//! Groups are kept in first-appearance order and the final sort is stable,
//! so the output is a deterministic function of the input order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use nsc_model::{GraduationFact, MajorCip, NormalizedEnrollmentRow, RawEnrollmentRow};
use serde::Serialize;

/// Placeholder for degree fields the clearinghouse left blank on a
/// graduated row.
const UNKNOWN: &str = "UNKNOWN";

/// Default College Sequence for rows that never had one.
const NO_SEQUENCE: &str = "0";

/// Row counts at each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationStats {
    pub input_rows: usize,
    pub found_rows: usize,
    pub no_activity_rows: usize,
    pub graduation_facts: usize,
    pub sequences_filled: usize,
    pub enrollment_periods: usize,
    pub output_rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedReturn {
    pub rows: Vec<NormalizedEnrollmentRow>,
    pub stats: AggregationStats,
}

/// Student identity as used for grouping. Missing names group as empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct StudentKey {
    last_name: String,
    first_name: String,
    middle_initial: String,
    name_suffix: String,
}

impl StudentKey {
    fn of(row: &RawEnrollmentRow) -> Self {
        Self {
            last_name: row.last_name.clone().unwrap_or_default(),
            first_name: row.first_name.clone().unwrap_or_default(),
            middle_initial: row.middle_initial.clone().unwrap_or_default(),
            name_suffix: row.name_suffix.clone().unwrap_or_default(),
        }
    }
}

type FillKey = (StudentKey, Option<String>, NaiveDate);
type PeriodKey = (StudentKey, Option<String>, Option<String>);
type DegreeKey = (StudentKey, Option<String>);

/// Running aggregate for one enrollment period.
struct Period {
    key: PeriodKey,
    first: RawEnrollmentRow,
    semesters: i64,
    begin: Option<NaiveDate>,
    end: Option<NaiveDate>,
    total_days: i64,
    last_major_1: Option<String>,
    last_cip_1: Option<String>,
    last_major_2: String,
    last_cip_2: String,
}

impl Period {
    fn start(key: PeriodKey, row: RawEnrollmentRow) -> Self {
        let mut period = Self {
            key,
            first: RawEnrollmentRow::default(),
            semesters: 0,
            begin: None,
            end: None,
            total_days: 0,
            last_major_1: None,
            last_cip_1: None,
            last_major_2: String::new(),
            last_cip_2: String::new(),
        };
        period.absorb(&row);
        period.first = row;
        period
    }

    fn absorb(&mut self, row: &RawEnrollmentRow) {
        self.semesters += 1;
        self.begin = pick(self.begin, row.enrollment_begin, Ord::min);
        self.end = pick(self.end, row.enrollment_end, Ord::max);
        self.total_days += row.enrollment_days().unwrap_or(0);

        let [first, second] = &row.enrollment_majors;
        if first.major.is_some() {
            self.last_major_1.clone_from(&first.major);
        }
        if first.cip.is_some() {
            self.last_cip_1.clone_from(&first.cip);
        }
        self.last_major_2 = second.major.clone().unwrap_or_default();
        self.last_cip_2 = second.cip.clone().unwrap_or_default();
    }

    fn into_row(self) -> NormalizedEnrollmentRow {
        let (student, _, _) = self.key;
        let first = self.first;
        let [major_1, major_2] = first.enrollment_majors;
        NormalizedEnrollmentRow {
            last_name: student.last_name,
            first_name: student.first_name,
            middle_initial: student.middle_initial,
            name_suffix: student.name_suffix,
            requester_return_field: first.requester_return_field.unwrap_or_default(),
            record_found: first.record_found.unwrap_or_default(),
            search_date: first.search_date.unwrap_or_default(),
            college_sequence: first
                .college_sequence
                .unwrap_or_else(|| NO_SEQUENCE.to_string()),
            college_code_branch: first.college_code_branch.unwrap_or_default(),
            college_name: first.college_name.unwrap_or_default(),
            college_state: first.college_state.unwrap_or_default(),
            two_or_four_year: first.two_or_four_year.unwrap_or_default(),
            public_private: first.public_private.unwrap_or_default(),
            enrollment_begin: format_date(self.begin),
            enrollment_end: format_date(self.end),
            enrollment_status: first.enrollment_status.unwrap_or_default(),
            class_level: first.class_level.unwrap_or_default(),
            enrollment_major_1: major_1.major.unwrap_or_default(),
            enrollment_cip_1: major_1.cip.unwrap_or_default(),
            enrollment_major_2: major_2.major.unwrap_or_default(),
            enrollment_cip_2: major_2.cip.unwrap_or_default(),
            last_enrollment_major_1: self.last_major_1.unwrap_or_default(),
            last_enrollment_cip_1: self.last_cip_1.unwrap_or_default(),
            last_enrollment_major_2: self.last_major_2,
            last_enrollment_cip_2: self.last_cip_2,
            semesters_at_institution: self.semesters,
            total_enrollment_days: self.total_days,
            ..NormalizedEnrollmentRow::default()
        }
    }
}

fn pick(
    current: Option<NaiveDate>,
    next: Option<NaiveDate>,
    choose: fn(NaiveDate, NaiveDate) -> NaiveDate,
) -> Option<NaiveDate> {
    match (current, next) {
        (Some(a), Some(b)) => Some(choose(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn graduation_fact(row: RawEnrollmentRow) -> GraduationFact {
    let unknown = || Some(UNKNOWN.to_string());
    let [first, second, third, fourth] = row.degree_majors;
    let first = MajorCip::new(
        first.major.or_else(unknown),
        first.cip.or_else(unknown),
    );
    GraduationFact {
        last_name: row.last_name.unwrap_or_default(),
        first_name: row.first_name.unwrap_or_default(),
        middle_initial: row.middle_initial.unwrap_or_default(),
        name_suffix: row.name_suffix.unwrap_or_default(),
        college_sequence: row.college_sequence,
        graduation_date: row.graduation_date,
        degree_title: row.degree_title.or_else(unknown),
        degree_majors: [first, second, third, fourth],
    }
}

fn degree_key(fact: &GraduationFact) -> DegreeKey {
    (
        StudentKey {
            last_name: fact.last_name.clone(),
            first_name: fact.first_name.clone(),
            middle_initial: fact.middle_initial.clone(),
            name_suffix: fact.name_suffix.clone(),
        },
        fact.college_sequence.clone(),
    )
}

/// Project a no-activity row: identity and correlation columns, with
/// `Graduated?` = `N` like every other row that matched no degree.
fn no_activity_row(row: RawEnrollmentRow) -> NormalizedEnrollmentRow {
    let mut projected = NormalizedEnrollmentRow {
        last_name: row.last_name.unwrap_or_default(),
        first_name: row.first_name.unwrap_or_default(),
        middle_initial: row.middle_initial.unwrap_or_default(),
        name_suffix: row.name_suffix.unwrap_or_default(),
        requester_return_field: row.requester_return_field.unwrap_or_default(),
        record_found: row.record_found.unwrap_or_default(),
        search_date: row.search_date.unwrap_or_default(),
        college_sequence: NO_SEQUENCE.to_string(),
        ..NormalizedEnrollmentRow::default()
    };
    projected.apply_graduation(None);
    projected
}

/// Sort key: student, then requester return field, then College Sequence.
/// Missing values sort last; numeric sequences compare as numbers.
struct SortKey {
    student: StudentKey,
    return_field: Option<String>,
    sequence: Option<String>,
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        self.student
            .cmp(&other.student)
            .then_with(|| missing_last(&self.return_field, &other.return_field, str::cmp))
            .then_with(|| missing_last(&self.sequence, &other.sequence, compare_sequence))
    }
}

fn missing_last(
    a: &Option<String>,
    b: &Option<String>,
    compare: fn(&str, &str) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_sequence(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Collapse a detail report into normalized rows.
pub fn aggregate(raw_rows: Vec<RawEnrollmentRow>) -> AggregatedReturn {
    let mut stats = AggregationStats {
        input_rows: raw_rows.len(),
        ..AggregationStats::default()
    };

    let (found, no_activity): (Vec<_>, Vec<_>) = raw_rows
        .into_iter()
        .partition(RawEnrollmentRow::is_record_found);
    stats.found_rows = found.len();
    stats.no_activity_rows = no_activity.len();

    let (graduated, mut enrolled): (Vec<_>, Vec<_>) =
        found.into_iter().partition(RawEnrollmentRow::is_graduated);
    let mut degrees: HashMap<DegreeKey, Vec<GraduationFact>> = HashMap::new();
    for row in graduated {
        let fact = graduation_fact(row);
        degrees.entry(degree_key(&fact)).or_default().push(fact);
        stats.graduation_facts += 1;
    }

    stats.sequences_filled = fill_sequences(&mut enrolled);

    let periods = group_periods(enrolled);
    stats.enrollment_periods = periods.len();

    let mut keyed: Vec<(SortKey, NormalizedEnrollmentRow)> = Vec::new();
    for period in periods {
        let (student, return_field, sequence) = period.key.clone();
        let row = period.into_row();
        let facts = degrees
            .get(&(student.clone(), sequence.clone()))
            .map(Vec::as_slice)
            .unwrap_or_default();

        let sort_key = || SortKey {
            student: student.clone(),
            return_field: return_field.clone(),
            sequence: sequence.clone(),
        };
        if facts.is_empty() {
            let mut row = row;
            row.apply_graduation(None);
            keyed.push((sort_key(), row));
        } else {
            for fact in facts {
                let mut with_degree = row.clone();
                with_degree.apply_graduation(Some(fact));
                keyed.push((sort_key(), with_degree));
            }
        }
    }
    for row in no_activity {
        let sort_key = SortKey {
            student: StudentKey::of(&row),
            return_field: row.requester_return_field.clone(),
            sequence: None,
        };
        keyed.push((sort_key, no_activity_row(row)));
    }

    keyed.sort_by(|(a, _), (b, _)| a.compare(b));
    let rows: Vec<NormalizedEnrollmentRow> = keyed.into_iter().map(|(_, row)| row).collect();
    stats.output_rows = rows.len();

    tracing::info!(
        input_rows = stats.input_rows,
        found_rows = stats.found_rows,
        no_activity_rows = stats.no_activity_rows,
        graduation_facts = stats.graduation_facts,
        enrollment_periods = stats.enrollment_periods,
        output_rows = stats.output_rows,
        "Aggregated detail report"
    );

    AggregatedReturn { rows, stats }
}

/// Carry College Sequence forward to continuation rows that share a
/// student, requester return field and enrollment begin. Returns the number
/// of cells filled.
fn fill_sequences(rows: &mut [RawEnrollmentRow]) -> usize {
    let mut last_seen: HashMap<FillKey, String> = HashMap::new();
    let mut filled = 0;
    for row in rows.iter_mut() {
        let Some(begin) = row.enrollment_begin else {
            continue;
        };
        let key = (
            StudentKey::of(row),
            row.requester_return_field.clone(),
            begin,
        );
        if let Some(sequence) = row.college_sequence.clone() {
            last_seen.insert(key, sequence);
        } else if let Some(sequence) = last_seen.get(&key) {
            row.college_sequence = Some(sequence.clone());
            filled += 1;
        }
    }
    tracing::debug!(filled, "Forward-filled College Sequence");
    filled
}

fn group_periods(rows: Vec<RawEnrollmentRow>) -> Vec<Period> {
    let mut index: HashMap<PeriodKey, usize> = HashMap::new();
    let mut periods: Vec<Period> = Vec::new();
    for row in rows {
        let key = (
            StudentKey::of(&row),
            row.requester_return_field.clone(),
            row.college_sequence.clone(),
        );
        match index.get(&key) {
            Some(&slot) => periods[slot].absorb(&row),
            None => {
                index.insert(key.clone(), periods.len());
                periods.push(Period::start(key, row));
            }
        }
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn semester(sequence: Option<&str>, begin: Option<NaiveDate>, major: &str) -> RawEnrollmentRow {
        RawEnrollmentRow {
            first_name: text("Ann"),
            last_name: text("Lee"),
            requester_return_field: text("S-001"),
            record_found: text("Y"),
            graduated: text("N"),
            college_sequence: sequence.map(str::to_string),
            enrollment_begin: begin,
            enrollment_end: begin.map(|b| b + chrono::Days::new(100)),
            enrollment_majors: [MajorCip::new(text(major), None), MajorCip::default()],
            ..RawEnrollmentRow::default()
        }
    }

    #[test]
    fn test_fill_forward_stays_within_begin_date() {
        let mut rows = vec![
            semester(Some("1"), date(2020, 8, 15), "BIO"),
            semester(None, date(2020, 8, 15), "BIO"),
            semester(None, date(2021, 1, 10), "BIO"),
        ];
        assert_eq!(fill_sequences(&mut rows), 1);
        assert_eq!(rows[1].college_sequence.as_deref(), Some("1"));
        assert_eq!(rows[2].college_sequence, None);
    }

    #[test]
    fn test_last_major_skips_missing_values() {
        let mut late = semester(Some("1"), date(2021, 1, 10), "");
        late.enrollment_majors[0].major = None;
        let rows = vec![semester(Some("1"), date(2020, 8, 15), "BIO"), late];
        let periods = group_periods(rows);
        assert_eq!(periods.len(), 1);
        let row = periods.into_iter().next().unwrap().into_row();
        assert_eq!(row.last_enrollment_major_1, "BIO");
        assert_eq!(row.semesters_at_institution, 2);
    }

    #[test]
    fn test_missing_sequence_is_its_own_period() {
        let rows = vec![
            semester(Some("1"), date(2020, 8, 15), "BIO"),
            semester(None, date(2021, 1, 10), "CHEM"),
        ];
        let result = aggregate(rows);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].college_sequence, "1");
        assert_eq!(result.rows[1].college_sequence, "0");
        assert_eq!(result.rows[1].enrollment_major_1, "CHEM");
    }

    #[test]
    fn test_sequences_sort_numerically() {
        let rows = vec![
            semester(Some("10"), date(2022, 1, 10), "BIO"),
            semester(Some("2"), date(2020, 8, 15), "BIO"),
        ];
        let result = aggregate(rows);
        let sequences: Vec<&str> = result
            .rows
            .iter()
            .map(|r| r.college_sequence.as_str())
            .collect();
        assert_eq!(sequences, vec!["2", "10"]);
    }

    #[test]
    fn test_no_activity_row_is_not_graduated() {
        let row = RawEnrollmentRow {
            first_name: text("Bo"),
            record_found: text("N"),
            ..RawEnrollmentRow::default()
        };
        let result = aggregate(vec![row]);
        assert_eq!(result.rows.len(), 1);
        let projected = &result.rows[0];
        assert_eq!(projected.graduated, "N");
        assert_eq!(projected.college_sequence, "0");
        assert_eq!(projected.semesters_at_institution, 0);
        assert_eq!(projected.degree_title, "");
        assert_eq!(projected.graduation_date, "");
    }

    #[test]
    fn test_blank_graduated_flag_stays_an_enrollment_row() {
        let mut blank = semester(Some("1"), date(2020, 8, 15), "BIO");
        blank.graduated = None;
        let result = aggregate(vec![blank]);
        assert_eq!(result.stats.graduation_facts, 0);
        assert_eq!(result.stats.enrollment_periods, 1);
        assert_eq!(result.rows[0].graduated, "N");
        assert_eq!(result.rows[0].semesters_at_institution, 1);
    }

    #[test]
    fn test_graduation_fact_fills_unknown() {
        let mut row = semester(Some("1"), date(2020, 8, 15), "BIO");
        row.graduated = text("Y");
        row.degree_majors[1].major = text("MATH");
        let fact = graduation_fact(row);
        assert_eq!(fact.degree_title.as_deref(), Some(UNKNOWN));
        assert_eq!(fact.degree_majors[0].major.as_deref(), Some(UNKNOWN));
        assert_eq!(fact.degree_majors[0].cip.as_deref(), Some(UNKNOWN));
        assert_eq!(fact.degree_majors[1].cip, None);
    }
}
