//! JSON and plain-text formatters

use anyhow::Result;
use serde::Serialize;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter. Output is meant for `grep`/`cut`: no colors, no
/// borders.
pub struct PlainFormatter;

impl PlainFormatter {
    /// One row per line, fields separated by tabs
    pub fn rows(rows: &[Vec<String>]) -> String {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|field| field.replace(['\t', '\n'], " "))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `key: value` lines
    pub fn key_value(items: &[(&str, String)]) -> String {
        items
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows_are_tab_separated() {
        let rows = vec![
            vec!["1".to_string(), "alice".to_string()],
            vec!["2".to_string(), "bob\tsmith".to_string()],
        ];
        assert_eq!(PlainFormatter::rows(&rows), "1\talice\n2\tbob smith");
    }

    #[test]
    fn test_plain_key_value() {
        let items = [("Name", "alice".to_string()), ("Role", "admin".to_string())];
        assert_eq!(PlainFormatter::key_value(&items), "Name: alice\nRole: admin");
    }

    #[test]
    fn test_json_formatter() {
        let json = JsonFormatter::format(&serde_json::json!({"total": 3})).unwrap();
        assert!(json.contains("\"total\": 3"));
    }
}
