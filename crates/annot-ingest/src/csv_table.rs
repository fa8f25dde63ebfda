use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

/// An uploaded table: named columns plus raw string rows.
///
/// The annotation editor only needs column names and a dimension preview;
/// cell values are kept verbatim for that preview.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// (row count, column count) for the preview line.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
///
/// The first non-empty row is taken as the header row. Headers are
/// normalized (BOM stripped, whitespace collapsed) and must be non-empty
/// and unique, since column names key the configuration document. Fully
/// empty rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        bail!("empty table: {}", path.display());
    }
    let headers: Vec<String> = raw_rows[0]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    validate_headers(&headers, path)?;
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "loaded table from {}",
        path.display()
    );
    Ok(CsvTable { headers, rows })
}

fn validate_headers(headers: &[String], path: &Path) -> Result<()> {
    let mut seen = BTreeSet::new();
    for header in headers {
        if header.is_empty() {
            bail!("unnamed column in {}", path.display());
        }
        if !seen.insert(header.as_str()) {
            bail!("duplicate column '{}' in {}", header, path.display());
        }
    }
    Ok(())
}
