//! Table rendering for descriptors and variant lists.

use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use svl_model::{OptionDescriptor, OptionName, OptionType, ShaderVariantList};
use svl_schema::OptionSchema;

pub fn descriptor_table(schema: &OptionSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Option"),
        header_cell("Type"),
        header_cell("Default"),
        header_cell("Indices"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for (index, descriptor) in schema.descriptors().iter().enumerate() {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(descriptor.name()).add_attribute(Attribute::Bold),
            Cell::new(type_label(descriptor.option_type())),
            Cell::new(descriptor.default_value()).fg(Color::Green),
            Cell::new(format!(
                "{}..={}",
                descriptor.min_index(),
                descriptor.max_index()
            )),
            Cell::new(value_summary(descriptor)),
        ]);
    }
    table
}

/// One row per variant, one column per option appearing anywhere in the
/// list. Unset cells are dimmed.
pub fn variant_table(list: &ShaderVariantList) -> Table {
    let columns: BTreeSet<&OptionName> = list
        .variants
        .iter()
        .flat_map(|row| row.options.keys())
        .collect();
    let mut table = Table::new();
    let mut header = vec![header_cell("StableId")];
    header.extend(columns.iter().map(|name| header_cell(name.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in &list.variants {
        let mut cells = vec![Cell::new(row.stable_id).add_attribute(Attribute::Bold)];
        cells.extend(columns.iter().map(|name| match row.options.get(*name) {
            Some(value) if !value.is_empty() => Cell::new(value),
            _ => dim_cell("-"),
        }));
        table.add_row(cells);
    }
    table
}

fn type_label(option_type: OptionType) -> &'static str {
    match option_type {
        OptionType::Boolean => "bool",
        OptionType::Enumeration => "enum",
        OptionType::IntegerRange => "int",
    }
}

fn value_summary(descriptor: &OptionDescriptor) -> String {
    if descriptor.option_type() == OptionType::IntegerRange {
        return format!("{} values", descriptor.value_count());
    }
    descriptor
        .values()
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
