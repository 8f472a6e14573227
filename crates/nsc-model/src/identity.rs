//! Student identity rows that feed an outbound request.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

/// Columns the request builder understands, by their input names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentityColumn {
    Ssn,
    FirstName,
    MiddleInitial,
    LastName,
    Suffix,
    Dob,
    SearchBeginDate,
    ReturnRequestField,
}

impl IdentityColumn {
    pub const ALL: [IdentityColumn; 8] = [
        IdentityColumn::Ssn,
        IdentityColumn::FirstName,
        IdentityColumn::MiddleInitial,
        IdentityColumn::LastName,
        IdentityColumn::Suffix,
        IdentityColumn::Dob,
        IdentityColumn::SearchBeginDate,
        IdentityColumn::ReturnRequestField,
    ];

    /// Columns an identity table must carry, even if some cells are empty.
    pub const REQUIRED: [IdentityColumn; 5] = [
        IdentityColumn::FirstName,
        IdentityColumn::MiddleInitial,
        IdentityColumn::LastName,
        IdentityColumn::Suffix,
        IdentityColumn::Dob,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IdentityColumn::Ssn => "SSN",
            IdentityColumn::FirstName => "FirstName",
            IdentityColumn::MiddleInitial => "MiddleInitial",
            IdentityColumn::LastName => "LastName",
            IdentityColumn::Suffix => "Suffix",
            IdentityColumn::Dob => "DOB",
            IdentityColumn::SearchBeginDate => "SearchBeginDate",
            IdentityColumn::ReturnRequestField => "ReturnRequestField",
        }
    }
}

impl fmt::Display for IdentityColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A date-like cell, tagged once when the row is loaded.
///
/// Typed date columns produce [`DateCell::Date`]; text columns produce
/// [`DateCell::Text`] and are validated later against `YYYYMMDD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateCell {
    Date(NaiveDate),
    Text(String),
    #[default]
    Missing,
}

impl DateCell {
    /// Tag a text cell; blank text is missing.
    pub fn from_text(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() => DateCell::Text(text.to_string()),
            _ => DateCell::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DateCell::Missing)
    }
}

impl From<NaiveDate> for DateCell {
    fn from(date: NaiveDate) -> Self {
        DateCell::Date(date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityRow {
    pub ssn: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub dob: DateCell,
    pub search_begin_date: DateCell,
    pub return_request_field: Option<String>,
}

/// Rows plus the set of columns the source actually carried.
///
/// Column presence matters independently of cell values: an absent
/// `SearchBeginDate` column triggers the configured default, while an empty
/// cell in a present column does not change the column-level behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityTable {
    columns: BTreeSet<IdentityColumn>,
    rows: Vec<IdentityRow>,
}

impl IdentityTable {
    pub fn new(columns: impl IntoIterator<Item = IdentityColumn>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<IdentityRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn push_row(&mut self, row: IdentityRow) {
        self.rows.push(row);
    }

    pub fn has_column(&self, column: IdentityColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn columns(&self) -> impl Iterator<Item = IdentityColumn> + '_ {
        self.columns.iter().copied()
    }

    /// Required columns the table does not carry, in canonical order.
    pub fn missing_required(&self) -> Vec<IdentityColumn> {
        IdentityColumn::REQUIRED
            .into_iter()
            .filter(|column| !self.columns.contains(column))
            .collect()
    }

    pub fn rows(&self) -> &[IdentityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
