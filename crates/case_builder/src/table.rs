//! Delimited table I/O
//!
//! Thin wrapper around the `csv` crate: comma separated, UTF-8, header row
//! required. Cells are kept as strings; no type inference.

use serde::Serialize;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CaseError, Result};

/// Header plus rows of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row`/`column`, empty string when the row is short
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Index of the first header containing `needle`, ignoring case
    pub fn find_column(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.headers
            .iter()
            .position(|h| h.to_lowercase().contains(&needle))
    }
}

/// Load a CSV file with a header row
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CaseError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CaseError::Io(e),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string()) // Strip BOM
        .collect();
    let mut table = Table::new(headers);

    for result in reader.records() {
        let record = result?;
        table.rows.push(record.iter().map(str::to_string).collect());
    }

    log::debug!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Write `table` as CSV, header first
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    create_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize `records` as CSV under `headers`. The header row is written even
/// when there are no records.
pub fn write_records<T: Serialize>(path: &Path, headers: &[&str], records: &[T]) -> Result<()> {
    create_parent_dir(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
