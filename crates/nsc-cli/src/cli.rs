//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use nsc_cli::config::{DEFAULT_CONFIG_FILE, RequestOverrides};
use nsc_model::{InquiryType, TrailerCountPolicy};

#[derive(Parser)]
#[command(
    name = "nsc",
    version,
    about = "Prepare clearinghouse request files and normalize detail reports",
    long_about = "Prepare enrollment-verification request files for the student-records \
                  clearinghouse and normalize the detail reports it returns.\n\n\
                  `request` turns a student CSV into a tab-separated request file.\n\
                  `convert` collapses a detail report into one row per enrollment period."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow student names to appear in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a request file from a student CSV.
    Request(RequestArgs),

    /// Normalize a clearinghouse detail report.
    Convert(ConvertArgs),
}

#[derive(Parser)]
pub struct RequestArgs {
    /// Student CSV with FirstName, MiddleInitial, LastName, Suffix and DOB columns.
    #[arg(value_name = "IDENTITY_CSV")]
    pub identity_csv: PathBuf,

    /// Configuration file with the school identity and request defaults.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: RequestOverrideArgs,

    /// Date written in the header and used as the default search date
    /// (YYYYMMDD, default: today).
    #[arg(long = "run-date", value_name = "YYYYMMDD")]
    pub run_date: Option<String>,

    /// Print the request file to stdout instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct RequestOverrideArgs {
    /// Inquiry type.
    #[arg(long = "inquiry-type", value_enum)]
    pub inquiry_type: Option<InquiryTypeArg>,

    /// Default search begin date (YYYY, YYYYMM, YYYY-MM, YYYYMMDD, YYYY-MM-DD).
    #[arg(long = "search", value_name = "DATE")]
    pub search: Option<String>,

    /// Request currently enrolled students; SSNs are not sent.
    #[arg(long = "enrolled-students")]
    pub enrolled_students: bool,

    /// Directory for the request file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Request file name (default: <fice>-<branch>_<inquiry>_<search>.csv).
    #[arg(long = "filename", value_name = "NAME")]
    pub filename: Option<String>,

    /// How the trailer record count is computed.
    #[arg(long = "trailer-count", value_enum)]
    pub trailer_count: Option<TrailerCountArg>,
}

impl RequestOverrideArgs {
    pub fn to_overrides(&self) -> RequestOverrides {
        RequestOverrides {
            inquiry_type: self.inquiry_type.map(|arg| match arg {
                InquiryTypeArg::Se => InquiryType::Se,
                InquiryTypeArg::Pa => InquiryType::Pa,
            }),
            search: self.search.clone(),
            enrolled_students: self.enrolled_students.then_some(true),
            output_dir: self.output_dir.clone(),
            filename: self.filename.clone(),
            trailer_count: self.trailer_count.map(|arg| match arg {
                TrailerCountArg::BodyRecords => TrailerCountPolicy::BodyRecords,
                TrailerCountArg::IncludeHeaderAndTrailer => {
                    TrailerCountPolicy::IncludeHeaderAndTrailer
                }
            }),
        }
    }
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Detail report CSV returned by the clearinghouse.
    #[arg(value_name = "RETURN_CSV")]
    pub return_csv: PathBuf,

    /// Output CSV (default: <RETURN_CSV stem>_normalized.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InquiryTypeArg {
    Se,
    Pa,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TrailerCountArg {
    BodyRecords,
    IncludeHeaderAndTrailer,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
