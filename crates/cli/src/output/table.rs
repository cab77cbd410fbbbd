//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn table() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a table with headers and pre-styled cells
    pub fn cells(headers: &[&str], rows: Vec<Vec<Cell>>) -> String {
        let mut table = Self::table();
        table.set_header(headers.to_vec());

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    }

    /// Create a key-value table
    pub fn key_value(items: &[(&str, String)]) -> String {
        let mut table = Self::table();

        for (key, value) in items {
            table.add_row(vec![Cell::new(key), Cell::new(value)]);
        }

        table.to_string()
    }
}
