//! Parsing the CVAS lab table into typed feed records.

use std::path::Path;

use tracing::{debug, warn};

use dietcomp_model::{FeedRecord, LabTable};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// Columns that must be present; anything else is optional and null-filled.
pub const REQUIRED_COLUMNS: [&str; 2] = ["desc_1", "feedtype"];

fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

fn required_column(table: &CsvTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
        })
}

/// Converts a raw CSV table into a `LabTable`.
///
/// `desc_1` and `feedtype` are mandatory; each analytical column is read
/// when present and left null otherwise. Rows without a feed description
/// (footer notes, section separators) are dropped.
pub fn parse_lab_table(table: &CsvTable) -> Result<LabTable> {
    let desc_idx = required_column(table, "desc_1")?;
    let feedtype_idx = required_column(table, "feedtype")?;

    let optional = |name: &str| {
        let index = table.column_index(name);
        if index.is_none() {
            debug!(column = name, "optional column absent, null-filled");
        }
        index
    };
    let ndf_idx = optional("NDF");
    let andfom_idx = optional("aNDFom");
    let rdp_idx = optional("RDP");
    let cp_idx = optional("CP");
    let tfa_idx = optional("TFA");
    let ash_idx = optional("Ash");
    let adf_idx = optional("ADF");
    let lignin_idx = optional("Lignin");
    let starch_idx = optional("Starch");
    let ndfd48_idx = optional("NDFD48");
    let ndfd30_idx = optional("NDFD30");

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for row in &table.rows {
        let desc_1 = table.cell(row, desc_idx).trim();
        if desc_1.is_empty() {
            skipped += 1;
            continue;
        }
        let numeric = |index: Option<usize>| index.and_then(|idx| parse_f64(table.cell(row, idx)));
        let mut record = FeedRecord::new(desc_1, table.cell(row, feedtype_idx).trim());
        record.ndf = numeric(ndf_idx);
        record.andfom = numeric(andfom_idx);
        record.rdp = numeric(rdp_idx);
        record.cp = numeric(cp_idx);
        record.tfa = numeric(tfa_idx);
        record.ash = numeric(ash_idx);
        record.adf = numeric(adf_idx);
        record.lignin = numeric(lignin_idx);
        record.starch = numeric(starch_idx);
        record.ndfd48 = numeric(ndfd48_idx);
        record.ndfd30 = numeric(ndfd30_idx);
        rows.push(record);
    }
    if skipped > 0 {
        warn!(skipped, "dropped rows without a feed description");
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyTable);
    }
    debug!(rows = rows.len(), "parsed lab table");
    Ok(LabTable::new(rows))
}

/// Reads and parses a lab CSV in one step.
pub fn load_lab_table(path: &Path) -> Result<LabTable> {
    let table = read_csv_table(path)?;
    parse_lab_table(&table)
}
