//! Terminal preview of an assembled sheet.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement};

use dietcomp_model::{CellValue, Table};

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Renders the first `max_rows` rows of a sheet for the console.
pub fn preview_table(table: &Table, max_rows: usize) -> comfy_table::Table {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    out.set_header(table.columns.iter().map(|column| header_cell(column)));
    for row in table.rows.iter().take(max_rows) {
        out.add_row(row.iter().map(|cell| match cell {
            CellValue::Missing => Cell::new("-").fg(Color::DarkGrey),
            other => Cell::new(other.render()),
        }));
    }
    out
}
