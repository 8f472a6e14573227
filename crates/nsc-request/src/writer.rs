//! Writing request files to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use nsc_model::{Advisory, AdvisoryKind, RequestConfig, RequestOptions};

use crate::error::Result;
use crate::file::RequestFile;

/// `<fice>-<branch>_<inquiry type>_<search date>.csv`
pub fn default_filename(config: &RequestConfig) -> String {
    format!(
        "{}-{}_{}_{}.csv",
        config.fice, config.branch, config.inquiry_type, config.search
    )
}

/// Chooses where a request file goes.
#[derive(Debug, Clone, Default)]
pub struct RequestFileWriter {
    output_dir: Option<PathBuf>,
    filename: Option<String>,
}

impl RequestFileWriter {
    pub fn new(output_dir: Option<PathBuf>, filename: Option<String>) -> Self {
        Self {
            output_dir,
            filename,
        }
    }

    pub fn from_options(options: &RequestOptions) -> Self {
        Self::new(options.output_path.clone(), options.filename.clone())
    }

    /// Resolve the target path and collect advisories about it.
    ///
    /// The directory defaults to `.` and the name to [`default_filename`].
    pub fn plan(&self, config: &RequestConfig) -> WritePlan {
        let dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = self
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| default_filename(config), str::to_string);
        let path = dir.join(filename);

        let mut advisories = Vec::new();
        if !dir.is_dir() {
            advisories.push(Advisory::new(
                AdvisoryKind::OutputPathMissing,
                format!("output directory {} does not exist", dir.display()),
            ));
        } else if path.exists() {
            advisories.push(Advisory::new(
                AdvisoryKind::OutputFileOverwritten,
                format!("{} already exists and will be overwritten", path.display()),
            ));
        }
        for advisory in &advisories {
            advisory.log();
        }

        WritePlan { path, advisories }
    }
}

/// A resolved output path plus the advisories raised while resolving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    pub path: PathBuf,
    pub advisories: Vec<Advisory>,
}

impl WritePlan {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the rendered file. A missing directory is not created, so the
    /// write fails with an I/O error in that case.
    pub fn write(&self, file: &RequestFile) -> Result<()> {
        let handle = File::create(&self.path)?;
        let mut writer = BufWriter::new(handle);
        file.write_to(&mut writer)?;
        writer.flush()?;
        tracing::info!(
            path = %self.path.display(),
            records = file.len(),
            "Wrote request file"
        );
        Ok(())
    }
}
