//! Request file layout and rendering.

use std::io::Write;

use chrono::NaiveDate;
use nsc_model::InquiryType;
use nsc_normalization::{format_compact, truncate_trim};
use serde::Serialize;

use crate::error::Result;

pub const FIRST_NAME_WIDTH: usize = 20;
pub const MIDDLE_INITIAL_WIDTH: usize = 1;
pub const LAST_NAME_WIDTH: usize = 20;
pub const SUFFIX_WIDTH: usize = 5;
pub const RETURN_REQUEST_FIELD_WIDTH: usize = 50;
pub const SCHOOL_NAME_WIDTH: usize = 40;

const HEADER_RECORD_TYPE: &str = "H1";
const DETAIL_RECORD_TYPE: &str = "D1";
const TRAILER_RECORD_TYPE: &str = "T1";
/// Mode flag carried in the header; `I` is the only mode the clearinghouse
/// accepts for these inquiries.
const HEADER_MODE: &str = "I";

/// One `D1` line. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    pub record_type: &'static str,
    pub ssn: String,
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub suffix: String,
    pub dob: String,
    pub search_begin_date: String,
    pub blank: String,
    pub school_code: String,
    pub branch_code: String,
    pub return_request_field: String,
    /// 1-based row of the identity table this record came from.
    #[serde(skip)]
    pub source_row: usize,
}

impl RequestRecord {
    pub fn detail(source_row: usize) -> Self {
        Self {
            record_type: DETAIL_RECORD_TYPE,
            ssn: String::new(),
            first_name: String::new(),
            middle_initial: String::new(),
            last_name: String::new(),
            suffix: String::new(),
            dob: String::new(),
            search_begin_date: String::new(),
            blank: String::new(),
            school_code: String::new(),
            branch_code: String::new(),
            return_request_field: String::new(),
            source_row,
        }
    }
}

/// The `H1` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    pub fice: String,
    pub branch: String,
    pub school_name: String,
    pub run_date: NaiveDate,
    pub inquiry_type: InquiryType,
}

impl RequestHeader {
    fn fields(&self) -> [String; 7] {
        [
            HEADER_RECORD_TYPE.to_string(),
            self.fice.clone(),
            self.branch.clone(),
            truncate_trim(Some(&self.school_name), SCHOOL_NAME_WIDTH),
            format_compact(self.run_date),
            self.inquiry_type.code().to_string(),
            HEADER_MODE.to_string(),
        ]
    }
}

/// A complete request: header, body records and trailer count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFile {
    pub header: RequestHeader,
    pub records: Vec<RequestRecord>,
    pub trailer_count: usize,
}

impl RequestFile {
    /// Write the file. Every line ends with `\n`; no field is quoted.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .from_writer(writer);

        csv.write_record(self.header.fields())?;
        for record in &self.records {
            csv.serialize(record)?;
        }
        csv.write_record([TRAILER_RECORD_TYPE.to_string(), self.trailer_count.to_string()])?;
        csv.flush()?;
        Ok(())
    }

    /// Render the file to a string.
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        // Every field is built from Rust strings, so the buffer is UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> RequestHeader {
        RequestHeader {
            fice: "001234".into(),
            branch: "00".into(),
            school_name: "  The Exceptionally Long Named University of Somewhere  ".into(),
            run_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            inquiry_type: InquiryType::Se,
        }
    }

    #[test]
    fn test_header_line_layout() {
        let file = RequestFile {
            header: header(),
            records: Vec::new(),
            trailer_count: 0,
        };
        let rendered = file.render().unwrap();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("H1\t001234\t00\tThe Exceptionally Long Named University\t20240301\tSE\tI")
        );
        assert_eq!(lines.next(), Some("T1\t0"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_empty_fields_stay_empty() {
        let mut record = RequestRecord::detail(1);
        record.first_name = "Ann".into();
        let file = RequestFile {
            header: header(),
            records: vec![record],
            trailer_count: 1,
        };
        let rendered = file.render().unwrap();
        let body = rendered.lines().nth(1).unwrap();
        assert_eq!(body, "D1\t\tAnn\t\t\t\t\t\t\t\t\t");
        assert_eq!(body.split('\t').count(), 12);
    }
}
