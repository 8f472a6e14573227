//! Column names used by the clearinghouse detail report and by the
//! normalized output.

pub const YOUR_UNIQUE_IDENTIFIER: &str = "Your Unique Identifier";
pub const FIRST_NAME: &str = "First Name";
pub const MIDDLE_INITIAL: &str = "Middle Initial";
pub const LAST_NAME: &str = "Last Name";
pub const NAME_SUFFIX: &str = "Name Suffix";
pub const REQUESTER_RETURN_FIELD: &str = "Requester Return Field";
pub const RECORD_FOUND: &str = "Record Found Y/N";
pub const SEARCH_DATE: &str = "Search Date";
pub const COLLEGE_CODE_BRANCH: &str = "College Code/Branch";
pub const COLLEGE_NAME: &str = "College Name";
pub const COLLEGE_STATE: &str = "College State";
pub const TWO_OR_FOUR_YEAR: &str = "2-year / 4-year";
pub const PUBLIC_PRIVATE: &str = "Public / Private";
pub const ENROLLMENT_BEGIN: &str = "Enrollment Begin";
pub const ENROLLMENT_END: &str = "Enrollment End";
pub const ENROLLMENT_STATUS: &str = "Enrollment Status";
pub const CLASS_LEVEL: &str = "Class Level";
pub const ENROLLMENT_MAJOR_1: &str = "Enrollment Major 1";
pub const ENROLLMENT_CIP_1: &str = "Enrollment CIP 1";
pub const ENROLLMENT_MAJOR_2: &str = "Enrollment Major 2";
pub const ENROLLMENT_CIP_2: &str = "Enrollment CIP 2";
pub const GRADUATED: &str = "Graduated?";
pub const GRADUATION_DATE: &str = "Graduation Date";
pub const DEGREE_TITLE: &str = "Degree Title";
pub const DEGREE_MAJOR_1: &str = "Degree Major 1";
pub const DEGREE_CIP_1: &str = "Degree CIP 1";
pub const DEGREE_MAJOR_2: &str = "Degree Major 2";
pub const DEGREE_CIP_2: &str = "Degree CIP 2";
pub const DEGREE_MAJOR_3: &str = "Degree Major 3";
pub const DEGREE_CIP_3: &str = "Degree CIP 3";
pub const DEGREE_MAJOR_4: &str = "Degree Major 4";
pub const DEGREE_CIP_4: &str = "Degree CIP 4";
pub const COLLEGE_SEQUENCE: &str = "College Sequence";

pub const LAST_ENROLLMENT_MAJOR_1: &str = "Last Enrollment Major 1";
pub const LAST_ENROLLMENT_CIP_1: &str = "Last Enrollment CIP 1";
pub const LAST_ENROLLMENT_MAJOR_2: &str = "Last Enrollment Major 2";
pub const LAST_ENROLLMENT_CIP_2: &str = "Last Enrollment CIP 2";
pub const SEMESTERS_AT_INSTITUTION: &str = "Semesters at Institution";
pub const TOTAL_ENROLLMENT_DAYS: &str = "Total Enrollment Days";

/// Columns a detail report must carry for aggregation to be meaningful.
pub const REQUIRED_RETURN_COLUMNS: [&str; 8] = [
    FIRST_NAME,
    LAST_NAME,
    REQUESTER_RETURN_FIELD,
    RECORD_FOUND,
    ENROLLMENT_BEGIN,
    ENROLLMENT_END,
    GRADUATED,
    COLLEGE_SEQUENCE,
];

/// Canonical column order of the normalized output.
pub const OUTPUT_COLUMNS: [&str; 38] = [
    LAST_NAME,
    FIRST_NAME,
    MIDDLE_INITIAL,
    NAME_SUFFIX,
    REQUESTER_RETURN_FIELD,
    RECORD_FOUND,
    SEARCH_DATE,
    COLLEGE_SEQUENCE,
    COLLEGE_CODE_BRANCH,
    COLLEGE_NAME,
    COLLEGE_STATE,
    TWO_OR_FOUR_YEAR,
    PUBLIC_PRIVATE,
    ENROLLMENT_BEGIN,
    ENROLLMENT_END,
    ENROLLMENT_STATUS,
    CLASS_LEVEL,
    ENROLLMENT_MAJOR_1,
    ENROLLMENT_CIP_1,
    ENROLLMENT_MAJOR_2,
    ENROLLMENT_CIP_2,
    LAST_ENROLLMENT_MAJOR_1,
    LAST_ENROLLMENT_CIP_1,
    LAST_ENROLLMENT_MAJOR_2,
    LAST_ENROLLMENT_CIP_2,
    SEMESTERS_AT_INSTITUTION,
    TOTAL_ENROLLMENT_DAYS,
    GRADUATED,
    GRADUATION_DATE,
    DEGREE_TITLE,
    DEGREE_MAJOR_1,
    DEGREE_CIP_1,
    DEGREE_MAJOR_2,
    DEGREE_CIP_2,
    DEGREE_MAJOR_3,
    DEGREE_CIP_3,
    DEGREE_MAJOR_4,
    DEGREE_CIP_4,
];
