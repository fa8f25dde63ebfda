//! Review-table and reader-output rendering.

use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use annot_ingest::CsvTable;
use annot_model::{ColumnType, ConfigDocument, countries};
use annot_session::ColumnSummary;

/// Rows shown in the upload preview.
const PREVIEW_ROWS: usize = 3;

/// Print the dimension line and first rows of an uploaded table.
pub fn print_preview(table: &CsvTable) {
    let (rows, cols) = table.dimensions();
    println!("Dimensions: {rows} rows \u{d7} {cols} columns");
    let mut preview = Table::new();
    preview.set_header(table.headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut preview);
    for row in table.rows.iter().take(PREVIEW_ROWS) {
        preview.add_row(row.clone());
    }
    println!("{preview}");
}

/// Print the per-column review table for the current session.
pub fn print_review(summaries: &[ColumnSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Country"),
        header_cell("Time Zone / Code"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.column).add_attribute(Attribute::Bold),
            type_cell(summary.column_type),
            optional_cell(summary.country.as_deref()),
            optional_cell(summary.detail.as_deref()),
            optional_cell(summary.unit.map(|u| u.as_str())),
        ]);
    }
    println!("{table}");
}

/// Print the static country reference table.
pub fn print_countries() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Phone Code"),
        header_cell("Time Zones"),
    ]);
    apply_table_style(&mut table);
    for entry in countries() {
        table.add_row(vec![
            Cell::new(entry.name).add_attribute(Attribute::Bold),
            Cell::new(entry.phone_code),
            Cell::new(entry.time_zones.join(", ")),
        ]);
    }
    println!("{table}");
}

/// Render the reader output for a stored document.
///
/// For each column: its type; for phone columns also the dialing code
/// (empty string when absent); the unit whenever one is present.
pub fn render_document(document: &ConfigDocument) -> String {
    let mut out = String::new();
    for (column, config) in document.iter() {
        let _ = writeln!(out, "Processing column: {column}");
        let _ = writeln!(out, "Type: {}", config.column_type);
        if config.column_type == ColumnType::Phone {
            let _ = writeln!(
                out,
                "Country code: {}",
                config.phone_code.as_deref().unwrap_or("")
            );
        }
        if let Some(unit) = config.unit {
            let _ = writeln!(out, "Measurement unit: {unit}");
        }
    }
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(column_type: ColumnType) -> Cell {
    let cell = Cell::new(column_type.as_str());
    match column_type {
        ColumnType::Primary => cell.fg(Color::Magenta),
        ColumnType::Time | ColumnType::Phone => cell.fg(Color::Yellow),
        ColumnType::Weights | ColumnType::Distance => cell.fg(Color::Green),
        _ => cell,
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
