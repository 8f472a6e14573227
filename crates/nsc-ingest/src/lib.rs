//! Ingestion for both directions of the clearinghouse exchange.
//!
//! - **Detail reports**: the clearinghouse's comma-separated return file,
//!   read with the `csv` crate into [`RawEnrollmentRow`](nsc_model::RawEnrollmentRow)s
//! - **Identity tables**: student rows for an outbound request, read from a
//!   CSV file or taken from any Polars `DataFrame`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use nsc_ingest::{read_identity_csv, read_return_file};
//!
//! let students = read_identity_csv(Path::new("students.csv"))?;
//! let detail = read_return_file(Path::new("1234567_DETAIL.csv"))?;
//! ```

mod cells;
mod error;
mod identity;
mod returns;

pub use cells::{any_to_date_cell, any_to_text};
pub use error::{IngestError, Result};
pub use identity::{identity_table_from_frame, read_identity_csv};
pub use returns::{read_return_file, read_return_rows};
