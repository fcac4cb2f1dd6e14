use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dietcomp_report::preview_table;

use crate::types::{ReportResult, SuggestResult};

const PREVIEW_ROWS: usize = 5;

pub fn print_report_summary(result: &ReportResult) {
    println!("Trial: {}", result.trial_id);
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let written = result.paths.is_some();
    for sheet in [&result.bundle.ficomp, &result.bundle.dietcomp, &result.bundle.key] {
        table.add_row(vec![
            Cell::new(&sheet.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sheet.rows.len()),
            Cell::new(sheet.columns.len()),
            written_cell(written),
        ]);
    }
    println!("{table}");

    if result.backfilled > 0 {
        println!(
            "Backfilled {} feed column(s) from the reference library.",
            result.backfilled
        );
    }
    if !written {
        println!("Dry run: no files written.");
    }

    println!();
    println!("FICOMP preview:");
    println!("{}", preview_table(&result.bundle.ficomp, PREVIEW_ROWS));
    println!();
    println!("DIETCOMP preview:");
    println!("{}", preview_table(&result.bundle.dietcomp, PREVIEW_ROWS));
}

pub fn print_suggestions(result: &SuggestResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Feed"),
        header_cell("Default TYPE"),
        header_cell("Default METHOD"),
        header_cell("Library match"),
        header_cell("Score"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in &result.feeds {
        if entry.suggestions.is_empty() {
            table.add_row(vec![
                Cell::new(&entry.feed),
                Cell::new(entry.default_type),
                Cell::new(entry.default_method),
                dim_cell("no candidate above the confidence floor"),
                dim_cell("-"),
            ]);
            continue;
        }
        for suggestion in &entry.suggestions {
            table.add_row(vec![
                Cell::new(&entry.feed),
                Cell::new(entry.default_type),
                Cell::new(entry.default_method),
                Cell::new(&suggestion.library_name),
                Cell::new(format!("{:.0}%", suggestion.score * 100.0)),
            ]);
        }
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
