//! Identity tables for outbound requests.

use std::path::Path;

use nsc_model::{CaseInsensitiveSet, IdentityColumn, IdentityRow, IdentityTable};
use polars::prelude::*;

use crate::cells::{any_to_date_cell, any_to_text};
use crate::error::{IngestError, Result, open_error};

/// Build an [`IdentityTable`] from a DataFrame.
///
/// Column names are matched case-insensitively. Columns the request format
/// does not use are ignored. Date-like columns are tagged per cell, so a
/// typed `Date` column and a text column of `YYYYMMDD` values both work.
pub fn identity_table_from_frame(df: &DataFrame) -> Result<IdentityTable> {
    let names = df.get_column_names();
    let lookup = CaseInsensitiveSet::new(names.iter().map(|name| name.as_str()));

    let mut present: Vec<(IdentityColumn, &Column)> = Vec::new();
    for column in IdentityColumn::ALL {
        if let Some(source) = lookup.get(column.name()) {
            present.push((column, df.column(source)?));
        }
    }

    let mut table = IdentityTable::new(present.iter().map(|(column, _)| *column));
    for idx in 0..df.height() {
        let mut row = IdentityRow::default();
        for (column, data) in &present {
            let value = data.get(idx).unwrap_or(AnyValue::Null);
            match column {
                IdentityColumn::Ssn => row.ssn = any_to_text(value),
                IdentityColumn::FirstName => row.first_name = any_to_text(value),
                IdentityColumn::MiddleInitial => row.middle_initial = any_to_text(value),
                IdentityColumn::LastName => row.last_name = any_to_text(value),
                IdentityColumn::Suffix => row.suffix = any_to_text(value),
                IdentityColumn::Dob => row.dob = any_to_date_cell(value),
                IdentityColumn::SearchBeginDate => {
                    row.search_begin_date = any_to_date_cell(value);
                }
                IdentityColumn::ReturnRequestField => {
                    row.return_request_field = any_to_text(value);
                }
            }
        }
        table.push_row(row);
    }

    tracing::debug!(
        rows = table.len(),
        columns = present.len(),
        "Built identity table"
    );
    Ok(table)
}

/// Read an identity CSV with every column as text.
///
/// Leading zeros in SSNs and `YYYYMMDD` dates survive because no schema is
/// inferred.
pub fn read_identity_csv(path: &Path) -> Result<IdentityTable> {
    std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            message: format!("{}: {e}", path.display()),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            message: format!("{}: {e}", path.display()),
        })?;

    let table = identity_table_from_frame(&df)?;
    tracing::info!(path = %path.display(), rows = table.len(), "Read identity table");
    Ok(table)
}
