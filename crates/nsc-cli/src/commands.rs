use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{info, info_span, trace};

use nsc_cli::config::{apply_overrides, load_config};
use nsc_cli::logging::redact_value;
use nsc_ingest::{read_identity_csv, read_return_file};
use nsc_normalization::parse_compact_date;
use nsc_request::{RequestFileWriter, RequestRecordBuilder, resolve_request_config};
use nsc_return::{aggregate, write_normalized_file};

use crate::cli::{ConvertArgs, RequestArgs};
use crate::types::{ConvertOutcome, RequestOutcome};

pub fn run_request(args: &RequestArgs) -> Result<RequestOutcome> {
    let span = info_span!("request", input = %args.identity_csv.display());
    let _guard = span.enter();

    let run_date = resolve_run_date(args.run_date.as_deref())?;
    let mut nsc_config = load_config(&args.config)?;
    apply_overrides(&mut nsc_config, &args.overrides.to_overrides());
    let (config, search_advisory) =
        resolve_request_config(&nsc_config, run_date).context("resolve request settings")?;

    let table = read_identity_csv(&args.identity_csv)
        .with_context(|| format!("read {}", args.identity_csv.display()))?;
    let build = RequestRecordBuilder::new(&config, run_date)
        .build(&table)
        .context("build request records")?;
    for record in &build.file.records {
        trace!(
            row = record.source_row,
            first_name = redact_value(&record.first_name),
            last_name = redact_value(&record.last_name),
            "Built detail record"
        );
    }

    let mut advisories: Vec<_> = search_advisory.into_iter().collect();
    advisories.extend(build.advisories.iter().cloned());

    let (output, rendered) = if args.dry_run {
        let rendered = build.file.render().context("render request file")?;
        (None, Some(rendered))
    } else {
        let plan = RequestFileWriter::from_options(&nsc_config.request).plan(&config);
        advisories.extend(plan.advisories.iter().cloned());
        plan.write(&build.file)
            .with_context(|| format!("write {}", plan.path().display()))?;
        (Some(plan.path), None)
    };

    info!(
        records = build.file.len(),
        dropped = build.dropped_rows.len(),
        advisories = advisories.len(),
        "Request complete"
    );

    Ok(RequestOutcome {
        input: args.identity_csv.clone(),
        output,
        inquiry_type: config.inquiry_type,
        search: config.search.clone(),
        input_rows: table.len(),
        records: build.file.len(),
        dropped_rows: build.dropped_rows,
        trailer_count: build.file.trailer_count,
        advisories,
        rendered,
    })
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let span = info_span!("convert", input = %args.return_csv.display());
    let _guard = span.enter();

    let raw_rows = read_return_file(&args.return_csv)
        .with_context(|| format!("read {}", args.return_csv.display()))?;
    let aggregated = aggregate(raw_rows);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_convert_output(&args.return_csv));
    write_normalized_file(&aggregated.rows, &output)
        .with_context(|| format!("write {}", output.display()))?;

    Ok(ConvertOutcome {
        input: args.return_csv.clone(),
        output,
        stats: aggregated.stats,
    })
}

fn resolve_run_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(text) => parse_compact_date(text.trim()).context("parse --run-date"),
        None => Ok(Local::now().date_naive()),
    }
}

/// `<stem>_normalized.csv` next to the input file.
fn default_convert_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "return".to_string());
    input.with_file_name(format!("{stem}_normalized.csv"))
}
