use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medclean_model::report::MetricValue;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.cleaned_path {
        println!("Cleaned data: {}", path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Summary report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, value) in result.report.iter() {
        table.add_row(vec![Cell::new(name), metric_cell(value)]);
    }
    table.add_row(vec![
        Cell::new("Output Records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.output_records).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.top_symptoms.is_empty() {
        let mut symptoms = Table::new();
        symptoms.set_header(vec![header_cell("Symptom Term"), header_cell("Count")]);
        apply_table_style(&mut symptoms);
        align_column(&mut symptoms, 1, CellAlignment::Right);
        for (term, count) in &result.top_symptoms {
            symptoms.add_row(vec![Cell::new(term), Cell::new(count)]);
        }
        println!();
        println!("Top symptom terms:");
        println!("{symptoms}");
    }
}

fn metric_cell(value: MetricValue) -> Cell {
    match value {
        MetricValue::Count(0) => dim_cell("0"),
        other => Cell::new(other),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
