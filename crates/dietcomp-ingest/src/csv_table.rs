//! Generic CSV table reading for lab exports.
//!
//! CVAS exports are not always clean: files may open with a lab title or
//! report-date line before the real header, and trailing blank lines are
//! common. The reader drops blank rows, strips BOMs, and probes the first
//! few rows to find the header before the numeric data begins.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a column by case-insensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell content at (row, column), empty when the row is short.
    pub fn cell<'a>(&'a self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_header(raw: &str) -> String {
    normalize_cell(raw).split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
}

impl RowStats {
    fn non_empty_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.non_empty as f64 / self.total as f64
        }
    }

    fn numeric_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.numeric as f64 / self.total as f64
        }
    }
}

fn row_stats(row: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: row.len(),
        ..RowStats::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
    }
    stats
}

/// Analysis rows carry mostly numbers; preamble/title rows carry a few
/// words and many empty cells.
fn is_data_like(stats: RowStats) -> bool {
    stats.numeric_ratio() >= 0.3
}

fn is_header_like(stats: RowStats) -> bool {
    stats.non_empty_ratio() >= 0.8 && stats.numeric_ratio() <= 0.1
}

/// Pick the last header-like row before the data begins, probing at most
/// the first five rows.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let probe = rows.len().min(5);
    let stats: Vec<RowStats> = rows.iter().take(probe).map(|row| row_stats(row)).collect();
    let data_index = stats.iter().position(|stat| is_data_like(*stat));
    let search_end = data_index.unwrap_or(1).max(1);
    let mut candidate = 0usize;
    for (idx, stat) in stats.iter().enumerate().take(search_end) {
        if is_header_like(*stat) {
            candidate = idx;
        }
    }
    candidate
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let header_index = detect_header_row(&raw_rows);
    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        header_index,
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}
