//! The downloadable CVAS starting template.
//!
//! Three representative feeds with typical CVAS values, used both as a
//! file-format example for labs and as a quick pipeline smoke input.

use std::path::Path;

use anyhow::{Context, Result};

pub const TEMPLATE_COLUMNS: [&str; 12] = [
    "desc_1", "feedtype", "NDF", "aNDFom", "RDP", "CP", "TFA", "Ash", "ADF", "Lignin", "Starch",
    "NDFD48",
];

const TEMPLATE_ROWS: [[&str; 12]; 3] = [
    [
        "CORN SILAGE SHORT",
        "FORAGE",
        "37.2",
        "35.3",
        "16.5",
        "24.4",
        "2.61",
        "3.66",
        "22.0",
        "2.72",
        "35.5",
        "62.8",
    ],
    [
        "CORN GRAIN",
        "GRAIN",
        "9.5",
        "9.5",
        "5.0",
        "8.6",
        "3.64",
        "1.35",
        "2.8",
        "1.69",
        "75.0",
        "",
    ],
    [
        "SOYBEAN MEAL",
        "PROTEIN",
        "12.0",
        "11.8",
        "30.0",
        "48.0",
        "1.0",
        "6.0",
        "10.0",
        "0.5",
        "2.0",
        "",
    ],
];

pub fn write_cvas_template(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create template: {}", path.display()))?;
    writer
        .write_record(TEMPLATE_COLUMNS)
        .context("write template header")?;
    for row in TEMPLATE_ROWS {
        writer.write_record(row).context("write template row")?;
    }
    writer.flush().context("flush template")?;
    Ok(())
}
