//! Configuration file loading and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nsc_model::{InquiryType, NscConfig, TrailerCountPolicy};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "nsc.toml";

/// Request settings given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub inquiry_type: Option<InquiryType>,
    pub search: Option<String>,
    pub enrolled_students: Option<bool>,
    pub output_dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub trailer_count: Option<TrailerCountPolicy>,
}

/// Read and parse a TOML configuration file.
pub fn load_config(path: &Path) -> Result<NscConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    let config: NscConfig = toml::from_str(&content)
        .with_context(|| format!("parse configuration {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Apply overrides on top of the file values.
pub fn apply_overrides(config: &mut NscConfig, overrides: &RequestOverrides) {
    let request = &mut config.request;
    if let Some(inquiry_type) = overrides.inquiry_type {
        request.inquiry_type = inquiry_type;
    }
    if let Some(search) = &overrides.search {
        request.search = Some(search.clone());
    }
    if let Some(enrolled) = overrides.enrolled_students {
        request.enrolled_students = enrolled;
    }
    if let Some(dir) = &overrides.output_dir {
        request.output_path = Some(dir.clone());
    }
    if let Some(filename) = &overrides.filename {
        request.filename = Some(filename.clone());
    }
    if let Some(policy) = overrides.trailer_count {
        request.trailer_count = policy;
    }
}
