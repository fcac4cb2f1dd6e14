//! The report assembler.
//!
//! Selects and orders the final columns of the three sheets. Pure column
//! selection: every value was computed upstream.

use dietcomp_model::{CellValue, DietDay, FeedComposition, KeyEntry, Nutrient, Table, ValueFlag};

pub const FICOMP_SHEET: &str = "FICOMP";
pub const DIETCOMP_SHEET: &str = "DIETCOMP";
pub const KEY_SHEET: &str = "KEY";

/// FICOMP column order. Fixed; the KEY sheet documents exactly this list.
pub const FICOMP_COLUMNS: [&str; 22] = [
    "Trial_ID",
    "FI",
    "LAB",
    "TYPE",
    "METHOD",
    "OM",
    "aNDF",
    "aNDF_Flag",
    "aNDFom",
    "ForNDF",
    "NDFD30",
    "NDFD48",
    "NDFD48_Flag",
    "ADF",
    "Lignin",
    "Starch",
    "CP",
    "RUP",
    "RUP_Flag",
    "FA",
    "FA_Flag",
    "Ash",
];

/// Empty trial ids still need a tag on every output row.
pub fn normalize_trial_id(trial_id: &str) -> String {
    let trimmed = trial_id.trim();
    if trimmed.is_empty() {
        "TRIAL".to_string()
    } else {
        trimmed.to_string()
    }
}

fn flag_cell(composition: &FeedComposition, nutrient: Nutrient) -> CellValue {
    CellValue::text(
        composition
            .flag(nutrient)
            .unwrap_or(ValueFlag::Actual)
            .as_str(),
    )
}

pub fn assemble_ficomp(trial_id: &str, compositions: &[FeedComposition]) -> Table {
    let columns = FICOMP_COLUMNS.iter().map(|name| (*name).to_string()).collect();
    let mut table = Table::new(FICOMP_SHEET, columns);
    let trial_id = normalize_trial_id(trial_id);
    for composition in compositions {
        table.push_row(vec![
            CellValue::text(trial_id.clone()),
            CellValue::text(composition.desc_1.clone()),
            CellValue::text(composition.lab.clone()),
            CellValue::text(composition.type_.clone()),
            CellValue::text(composition.method.clone()),
            CellValue::number(composition.om),
            CellValue::number(composition.andf),
            flag_cell(composition, Nutrient::Andf),
            CellValue::number(composition.andfom),
            CellValue::number(composition.forndf),
            CellValue::number(composition.ndfd30),
            CellValue::number(composition.ndfd48),
            flag_cell(composition, Nutrient::Ndfd48),
            CellValue::number(composition.adf),
            CellValue::number(composition.lignin),
            CellValue::number(composition.starch),
            CellValue::number(composition.cp),
            CellValue::number(composition.rup),
            flag_cell(composition, Nutrient::Rup),
            CellValue::number(composition.fa),
            flag_cell(composition, Nutrient::Fa),
            CellValue::number(composition.ash),
        ]);
    }
    table
}

pub fn assemble_dietcomp(days: &[DietDay]) -> Table {
    let mut columns = vec![
        "Trial_ID".to_string(),
        "Diet".to_string(),
        "Date".to_string(),
        "TMR_DM".to_string(),
    ];
    columns.extend(Nutrient::ALL.iter().map(|nutrient| nutrient.column_name().to_string()));
    let mut table = Table::new(DIETCOMP_SHEET, columns);
    for day in days {
        let mut row = vec![
            CellValue::text(day.trial_id.clone()),
            CellValue::text(day.diet.clone()),
            CellValue::text(day.date.to_string()),
            CellValue::Number(day.tmr_dm),
        ];
        row.extend(
            Nutrient::ALL
                .iter()
                .map(|nutrient| CellValue::Number(day.value(*nutrient))),
        );
        table.push_row(row);
    }
    table
}

/// One KEY row per FICOMP column. The definitions are a scaffold for the
/// analysts, not documentation generated here.
pub fn assemble_key(ficomp: &Table) -> (Table, Vec<KeyEntry>) {
    let entries: Vec<KeyEntry> = ficomp
        .columns
        .iter()
        .map(|column| KeyEntry {
            variable: column.clone(),
            definition: "See documentation".to_string(),
        })
        .collect();
    let mut table = Table::new(
        KEY_SHEET,
        vec!["Variable".to_string(), "Definition".to_string()],
    );
    for entry in &entries {
        table.push_row(vec![
            CellValue::text(entry.variable.clone()),
            CellValue::text(entry.definition.clone()),
        ]);
    }
    (table, entries)
}
