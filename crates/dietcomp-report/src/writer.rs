//! CSV output for the assembled sheets.
//!
//! Writing starts only after the whole bundle has been assembled, so
//! pipeline failures never produce partial sheets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use dietcomp_core::ReportBundle;
use dietcomp_model::{CellValue, Table};

/// Where one report run landed on disk.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub ficomp: PathBuf,
    pub dietcomp: PathBuf,
    pub key: PathBuf,
}

pub fn write_table_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(CellValue::render))
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Writes FICOMP, DIETCOMP, and KEY under `output_dir`.
pub fn write_bundle(bundle: &ReportBundle, output_dir: &Path) -> Result<ReportPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let paths = ReportPaths {
        ficomp: output_dir.join("FICOMP.csv"),
        dietcomp: output_dir.join("DIETCOMP.csv"),
        key: output_dir.join("KEY.csv"),
    };
    write_table_csv(&bundle.ficomp, &paths.ficomp)?;
    write_table_csv(&bundle.dietcomp, &paths.dietcomp)?;
    write_table_csv(&bundle.key, &paths.key)?;
    info!(dir = %output_dir.display(), "wrote report sheets");
    Ok(paths)
}
