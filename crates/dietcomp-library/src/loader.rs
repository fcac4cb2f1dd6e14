//! Loading a reference library CSV.
//!
//! The file needs a `Feed Name` column; every other column is treated as a
//! reference value column (the NASEM 2021 export names them `Feed <X>`).

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{LibraryError, Result};
use crate::reference::{ReferenceLibrary, entry_from_row};

/// Column holding the feed display name.
pub const NAME_COLUMN: &str = "Feed Name";

fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

pub fn load_reference_library(path: &Path) -> Result<ReferenceLibrary> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();
    let name_idx = headers
        .iter()
        .position(|header| header == NAME_COLUMN)
        .ok_or_else(|| LibraryError::MissingColumn {
            column: NAME_COLUMN.to_string(),
        })?;
    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != name_idx)
        .map(|(_, header)| header.clone())
        .collect();

    let mut library = ReferenceLibrary {
        columns,
        entries: Vec::new(),
    };
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let mut values = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == name_idx {
                continue;
            }
            if let Some(value) = record.get(idx).and_then(parse_f64) {
                values.push((header.clone(), value));
            }
        }
        library.entries.push(entry_from_row(name, values));
    }
    if library.is_empty() {
        return Err(LibraryError::Empty);
    }
    debug!(
        path = %path.display(),
        entries = library.len(),
        columns = library.columns.len(),
        "loaded reference library"
    );
    Ok(library)
}
