//! Configuration values supplied by the caller.
//!
//! [`NscConfig`] mirrors the on-disk configuration file. The request builder
//! only ever sees a [`RequestConfig`], which is the fully resolved form with
//! defaults applied and the search date expanded.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Clearinghouse inquiry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InquiryType {
    /// Enrollment verification for currently enrolled students.
    #[serde(rename = "SE", alias = "se")]
    Se,
    /// Prior attendance; may carry SSNs.
    #[default]
    #[serde(rename = "PA", alias = "pa")]
    Pa,
}

impl InquiryType {
    pub fn code(self) -> &'static str {
        match self {
            InquiryType::Se => "SE",
            InquiryType::Pa => "PA",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InquiryType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SE" => Ok(InquiryType::Se),
            "PA" => Ok(InquiryType::Pa),
            _ => Err(ModelError::UnknownInquiryType(value.to_string())),
        }
    }
}

/// How the trailer record count is derived from the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailerCountPolicy {
    /// Count of body (`D1`) records actually written.
    #[default]
    BodyRecords,
    /// Body records plus the header and trailer lines.
    IncludeHeaderAndTrailer,
}

impl TrailerCountPolicy {
    pub fn count(self, body_records: usize) -> usize {
        match self {
            TrailerCountPolicy::BodyRecords => body_records,
            TrailerCountPolicy::IncludeHeaderAndTrailer => body_records + 2,
        }
    }
}

impl FromStr for TrailerCountPolicy {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "body-records" | "body" => Ok(TrailerCountPolicy::BodyRecords),
            "include-header-and-trailer" | "all" => Ok(TrailerCountPolicy::IncludeHeaderAndTrailer),
            _ => Err(ModelError::UnknownTrailerPolicy(value.to_string())),
        }
    }
}

/// Identity of the requesting school.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    /// Federal Interagency Committee on Education code.
    pub fice: String,
    /// Branch (sub-campus) code, usually `00`.
    pub branch: String,
    /// Full school name; the header carries at most 40 characters of it.
    pub name: String,
}

/// Per-request options. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub inquiry_type: InquiryType,
    /// Default search begin date: `YYYY`, `YYYYMM`, `YYYY-MM`, `YYYYMMDD` or
    /// `YYYY-MM-DD`. Falls back to the run date.
    pub search: Option<String>,
    /// Set when requesting currently enrolled students; suppresses SSNs.
    pub enrolled_students: bool,
    pub output_path: Option<PathBuf>,
    pub filename: Option<String>,
    pub trailer_count: TrailerCountPolicy,
}

/// Top-level configuration as read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NscConfig {
    pub school: SchoolConfig,
    #[serde(default)]
    pub request: RequestOptions,
}

impl NscConfig {
    /// Check that the school identity is complete.
    pub fn validate(&self) -> Result<()> {
        if self.school.fice.trim().is_empty() {
            return Err(ModelError::MissingConfig("school.fice"));
        }
        if self.school.branch.trim().is_empty() {
            return Err(ModelError::MissingConfig("school.branch"));
        }
        if self.school.name.trim().is_empty() {
            return Err(ModelError::MissingConfig("school.name"));
        }
        Ok(())
    }
}

/// Fully resolved request settings consumed by the request builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub fice: String,
    pub branch: String,
    pub school_name: String,
    pub inquiry_type: InquiryType,
    /// Search begin date already in `YYYYMMDD` form.
    pub search: String,
    pub enrolled_students: bool,
    pub trailer_count: TrailerCountPolicy,
}

impl RequestConfig {
    /// SSNs travel only on prior-attendance requests that are not limited to
    /// enrolled students.
    pub fn ssn_allowed(&self) -> bool {
        self.inquiry_type == InquiryType::Pa && !self.enrolled_students
    }
}
