use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nsc_model::{Advisory, AdvisoryKind};

use crate::types::{ConvertOutcome, RequestOutcome};

pub fn print_request_summary(outcome: &RequestOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Request file: {}", path.display()),
        None => println!("Request file: (dry run, not written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Inquiry type"), Cell::new(outcome.inquiry_type)]);
    table.add_row(vec![Cell::new("Search date"), Cell::new(&outcome.search)]);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(outcome.input_rows)]);
    table.add_row(vec![
        Cell::new("Detail records"),
        Cell::new(outcome.records).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Dropped rows"),
        count_cell(outcome.dropped_rows.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Trailer count"),
        Cell::new(outcome.trailer_count),
    ]);
    println!("{table}");
    print_advisory_table(&outcome.advisories);
}

pub fn print_convert_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.output.display());
    let stats = &outcome.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in [
        ("Report rows", stats.input_rows),
        ("Records found", stats.found_rows),
        ("No activity", stats.no_activity_rows),
        ("Graduation facts", stats.graduation_facts),
        ("Sequences filled", stats.sequences_filled),
        ("Enrollment periods", stats.enrollment_periods),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("Output rows")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_advisory_table(advisories: &[Advisory]) {
    if advisories.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Message")]);
    apply_table_style(&mut table);
    for advisory in advisories {
        table.add_row(vec![kind_cell(advisory.kind), Cell::new(&advisory.message)]);
    }
    println!();
    println!("Advisories:");
    println!("{table}");
}

fn kind_cell(kind: AdvisoryKind) -> Cell {
    let label = match kind {
        AdvisoryKind::SsnSuppressed => "SSN",
        AdvisoryKind::ReturnRequestFieldMissing => "RETURN FIELD",
        AdvisoryKind::SearchBeginDateDefaulted => "SEARCH DATE",
        AdvisoryKind::SearchDateExpanded => "SEARCH DATE",
        AdvisoryKind::RowsDropped => "ROWS",
        AdvisoryKind::OutputPathMissing => "OUTPUT",
        AdvisoryKind::OutputFileOverwritten => "OUTPUT",
    };
    if kind.is_informational() {
        Cell::new(label).fg(Color::DarkGrey)
    } else {
        Cell::new(label).fg(Color::Yellow)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
