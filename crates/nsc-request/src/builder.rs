//! Identity rows to request records.

use chrono::NaiveDate;
use nsc_model::{
    Advisory, AdvisoryKind, IdentityColumn, IdentityRow, IdentityTable, RequestConfig,
};
use nsc_normalization::{
    coerce_date_to_compact, single_line, truncate_trim, truncate_trim_ascii,
};

use crate::error::{RequestError, Result};
use crate::file::{
    FIRST_NAME_WIDTH, LAST_NAME_WIDTH, MIDDLE_INITIAL_WIDTH, RETURN_REQUEST_FIELD_WIDTH,
    RequestFile, RequestHeader, RequestRecord, SUFFIX_WIDTH,
};

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuild {
    pub file: RequestFile,
    /// Non-fatal notices, in the order they were raised.
    pub advisories: Vec<Advisory>,
    /// 1-based identity rows left out because their first name was empty.
    pub dropped_rows: Vec<usize>,
}

/// Which optional columns the table carries, resolved once per build.
#[derive(Debug, Clone, Copy)]
struct ColumnPlan {
    ssn: bool,
    search_begin_date: bool,
    return_request_field: bool,
}

/// Builds a [`RequestFile`] from an [`IdentityTable`].
pub struct RequestRecordBuilder<'a> {
    config: &'a RequestConfig,
    run_date: NaiveDate,
}

impl<'a> RequestRecordBuilder<'a> {
    /// `run_date` goes into the header; it is passed in so output is
    /// reproducible.
    pub fn new(config: &'a RequestConfig, run_date: NaiveDate) -> Self {
        Self { config, run_date }
    }

    /// Validate the table and encode every row.
    ///
    /// Fails without producing output when the table is empty, lacks a
    /// required column, or carries a DOB or SearchBeginDate that is neither a
    /// date nor `YYYYMMDD` text.
    pub fn build(&self, table: &IdentityTable) -> Result<RequestBuild> {
        if table.is_empty() {
            return Err(RequestError::EmptyInput);
        }
        let missing = table.missing_required();
        if !missing.is_empty() {
            return Err(RequestError::MissingColumns { columns: missing });
        }

        let mut advisories = Vec::new();
        let plan = self.plan_columns(table, &mut advisories);

        let mut records = Vec::with_capacity(table.len());
        let mut dropped_rows = Vec::new();
        for (index, row) in table.rows().iter().enumerate() {
            let source_row = index + 1;
            let record = self.encode_row(row, source_row, plan)?;
            if record.first_name.is_empty() {
                tracing::debug!(row = source_row, "Dropping row without a first name");
                dropped_rows.push(source_row);
                continue;
            }
            tracing::trace!(row = source_row, "Encoded request record");
            records.push(record);
        }

        if !dropped_rows.is_empty() {
            push_advisory(
                &mut advisories,
                AdvisoryKind::RowsDropped,
                format!(
                    "{} row(s) without a first name were left out of the request",
                    dropped_rows.len()
                ),
            );
        }

        let trailer_count = self.config.trailer_count.count(records.len());
        tracing::info!(
            rows = table.len(),
            records = records.len(),
            dropped = dropped_rows.len(),
            trailer_count,
            "Built request file"
        );

        Ok(RequestBuild {
            file: RequestFile {
                header: self.header(),
                records,
                trailer_count,
            },
            advisories,
            dropped_rows,
        })
    }

    fn plan_columns(&self, table: &IdentityTable, advisories: &mut Vec<Advisory>) -> ColumnPlan {
        let has_ssn = table.has_column(IdentityColumn::Ssn);
        let ssn = has_ssn && self.config.ssn_allowed();
        if has_ssn && !ssn {
            push_advisory(
                advisories,
                AdvisoryKind::SsnSuppressed,
                format!(
                    "SSN column ignored: SSNs are only sent on PA inquiries that are not \
                     limited to enrolled students (inquiry type {}, enrolled students {})",
                    self.config.inquiry_type, self.config.enrolled_students
                ),
            );
        }

        let search_begin_date = table.has_column(IdentityColumn::SearchBeginDate);
        if !search_begin_date {
            push_advisory(
                advisories,
                AdvisoryKind::SearchBeginDateDefaulted,
                format!(
                    "no SearchBeginDate column; using search date {} for every row",
                    self.config.search
                ),
            );
        }

        let return_request_field = table.has_column(IdentityColumn::ReturnRequestField);
        if !return_request_field {
            push_advisory(
                advisories,
                AdvisoryKind::ReturnRequestFieldMissing,
                "no ReturnRequestField column; responses will be hard to match back to students",
            );
        }

        ColumnPlan {
            ssn,
            search_begin_date,
            return_request_field,
        }
    }

    fn encode_row(
        &self,
        row: &IdentityRow,
        source_row: usize,
        plan: ColumnPlan,
    ) -> Result<RequestRecord> {
        let mut record = RequestRecord::detail(source_row);

        if plan.ssn {
            record.ssn = row
                .ssn
                .as_deref()
                .map(|ssn| single_line(ssn).trim().to_string())
                .unwrap_or_default();
        }
        record.first_name = truncate_trim_ascii(row.first_name.as_deref(), FIRST_NAME_WIDTH);
        record.middle_initial =
            truncate_trim_ascii(row.middle_initial.as_deref(), MIDDLE_INITIAL_WIDTH);
        record.last_name = truncate_trim_ascii(row.last_name.as_deref(), LAST_NAME_WIDTH);
        record.suffix = truncate_trim_ascii(row.suffix.as_deref(), SUFFIX_WIDTH);

        record.dob = coerce_date_to_compact(&row.dob).map_err(|err| RequestError::InvalidDob {
            row: source_row,
            value: err.value,
        })?;

        record.search_begin_date = if plan.search_begin_date && !row.search_begin_date.is_missing()
        {
            coerce_date_to_compact(&row.search_begin_date).map_err(|err| {
                RequestError::InvalidSearchBeginDate {
                    row: source_row,
                    value: err.value,
                }
            })?
        } else {
            self.config.search.clone()
        };

        if plan.return_request_field {
            record.return_request_field = truncate_trim(
                row.return_request_field.as_deref(),
                RETURN_REQUEST_FIELD_WIDTH,
            );
        }

        record.school_code.clone_from(&self.config.fice);
        record.branch_code.clone_from(&self.config.branch);
        Ok(record)
    }

    fn header(&self) -> RequestHeader {
        RequestHeader {
            fice: self.config.fice.clone(),
            branch: self.config.branch.clone(),
            school_name: self.config.school_name.clone(),
            run_date: self.run_date,
            inquiry_type: self.config.inquiry_type,
        }
    }
}

fn push_advisory(advisories: &mut Vec<Advisory>, kind: AdvisoryKind, message: impl Into<String>) {
    let advisory = Advisory::new(kind, message);
    advisory.log();
    advisories.push(advisory);
}
