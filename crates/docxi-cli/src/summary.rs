use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use docxi_model::{FilterOption, FilterOptions, FilterReport};

use crate::types::{ExportResult, PreviewResult};

/// Line statistics for a preview, printed to stderr so stdout stays the text.
pub fn print_preview_stats(result: &PreviewResult) {
    eprintln!("Input: {}", result.input.display());
    eprintln!("{}", filter_table(&result.options, &result.report));
}

pub fn print_export_summary(result: &ExportResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.destination.display());
    println!("{}", filter_table(&result.options, &result.report));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Paragraphs"),
        header_cell("Font"),
        header_cell("Bytes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.paragraphs),
        Cell::new(&result.font),
        Cell::new(result.bytes_written),
    ]);
    println!("{table}");
    println!("File saved successfully!");
}

pub fn print_export_json(result: &ExportResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn filter_table(options: &FilterOptions, report: &FilterReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Enabled"),
        header_cell("Removed"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for option in FilterOption::ALL {
        let removed = match option {
            FilterOption::DropCjk => report.dropped_cjk,
            FilterOption::DropBlank => report.dropped_blank,
        };
        table.add_row(vec![
            Cell::new(option.label()),
            enabled_cell(options.get(option)),
            count_cell(removed, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Lines kept")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} / {}", report.kept, report.total)).add_attribute(Attribute::Bold),
    ]);
    table
}

fn enabled_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
