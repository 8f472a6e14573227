//! Detail report aggregation.
//!
//! The clearinghouse reports one row per semester. [`aggregate`] collapses
//! those into one row per student, requester return field and enrollment
//! period (identified by College Sequence), attaches any degree earned at
//! that institution, and passes no-activity rows through. The result can be
//! written as CSV or handed on as a Polars `DataFrame`.

mod aggregate;
mod error;
mod output;

pub use aggregate::{AggregatedReturn, AggregationStats, aggregate};
pub use error::{ReturnError, Result};
pub use output::{normalized_frame, write_normalized_csv, write_normalized_file};
