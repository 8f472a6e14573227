//! Outbound request files for the clearinghouse.
//!
//! A request file is a tab-separated text file: one `H1` header line, one
//! `D1` line per student, and a `T1` trailer carrying the record count.
//!
//! # Example
//!
//! ```ignore
//! use nsc_request::{RequestFileWriter, RequestRecordBuilder, resolve_request_config};
//!
//! let (config, _) = resolve_request_config(&nsc_config, run_date)?;
//! let build = RequestRecordBuilder::new(&config, run_date).build(&identity_table)?;
//! let plan = RequestFileWriter::from_options(&nsc_config.request).plan(&config);
//! plan.write(&build.file)?;
//! ```

mod builder;
mod config;
mod error;
mod file;
mod writer;

pub use builder::{RequestBuild, RequestRecordBuilder};
pub use config::resolve_request_config;
pub use error::{RequestError, Result};
pub use file::{
    FIRST_NAME_WIDTH, LAST_NAME_WIDTH, MIDDLE_INITIAL_WIDTH, RETURN_REQUEST_FIELD_WIDTH,
    RequestFile, RequestHeader, RequestRecord, SCHOOL_NAME_WIDTH, SUFFIX_WIDTH,
};
pub use writer::{RequestFileWriter, WritePlan, default_filename};
