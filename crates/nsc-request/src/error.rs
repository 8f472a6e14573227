//! Error types for request building and writing.

use nsc_model::{IdentityColumn, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    // === Validation Errors ===
    /// The identity table has no rows.
    #[error("identity table has no rows")]
    EmptyInput,

    /// Required columns are absent from the identity table.
    #[error("identity table is missing required column(s): {}", join(columns))]
    MissingColumns { columns: Vec<IdentityColumn> },

    /// A DOB value that is neither a date nor `YYYYMMDD` text.
    #[error("row {row}: DOB '{value}' is not a date or YYYYMMDD text")]
    InvalidDob { row: usize, value: String },

    // === Format Errors ===
    /// A SearchBeginDate value that is neither a date nor `YYYYMMDD` text.
    #[error("row {row}: SearchBeginDate '{value}' is not a date or YYYYMMDD text")]
    InvalidSearchBeginDate { row: usize, value: String },

    /// The configured search date does not expand to `YYYYMMDD`.
    #[error("search date '{value}' is not YYYY, YYYYMM, YYYY-MM, YYYYMMDD or YYYY-MM-DD")]
    InvalidSearchDate { value: String },

    // === Configuration Errors ===
    #[error("invalid configuration: {0}")]
    Config(#[from] ModelError),

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write request record: {0}")]
    Csv(#[from] csv::Error),
}

impl RequestError {
    /// Errors caused by the shape or content of the identity table.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RequestError::EmptyInput
                | RequestError::MissingColumns { .. }
                | RequestError::InvalidDob { .. }
        )
    }

    /// Errors caused by a value that does not match its required format.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            RequestError::InvalidSearchBeginDate { .. } | RequestError::InvalidSearchDate { .. }
        )
    }
}

fn join(columns: &[IdentityColumn]) -> String {
    columns
        .iter()
        .map(|column| column.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for request operations.
pub type Result<T> = std::result::Result<T, RequestError>;
