use std::path::PathBuf;

use nsc_model::{Advisory, InquiryType};
use nsc_return::AggregationStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RequestOutcome {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub inquiry_type: InquiryType,
    pub search: String,
    pub input_rows: usize,
    pub records: usize,
    pub dropped_rows: Vec<usize>,
    pub trailer_count: usize,
    pub advisories: Vec<Advisory>,
    #[serde(skip)]
    pub rendered: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: AggregationStats,
}
