//! Table formatting and output utilities
//!
//! This module provides functionality for formatting listing output in
//! the supported render formats, with color support for tables.

use crate::error::Result;
use clap::ValueEnum;
use crossterm::terminal::size;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Padding, Style, Width},
    Table, Tabled,
};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Yaml,
    Json,
    Text,
}

/// Table formatter with color support
pub struct TableFormatter {
    format: OutputFormat,
    no_color: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    /// Render records in the requested format
    pub fn format_items<T: Tabled + Serialize>(&self, data: &[T]) -> Result<String> {
        if data.is_empty() {
            return Ok("No data to display".to_string());
        }

        match self.format {
            OutputFormat::Table => self.format_as_table(data),
            OutputFormat::Csv => self.format_as_csv(data),
            OutputFormat::Yaml => self.format_as_yaml(data),
            OutputFormat::Json => self.format_as_json(data),
            OutputFormat::Text => self.format_as_text(data),
        }
    }

    /// Format data as a styled table
    fn format_as_table<T: Tabled>(&self, data: &[T]) -> Result<String> {
        let mut table = Table::new(data);

        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Padding::new(1, 1, 0, 0));

        if !self.no_color {
            table.with(Modify::new(Rows::first()).with(Color::FG_BLUE));
        }

        // Auto-adjust width to terminal
        if let Ok((width, _)) = size() {
            table.with(Width::wrap(width as usize));
        }

        Ok(table.to_string())
    }

    /// Format data as CSV with a header row
    fn format_as_csv<T: Tabled>(&self, data: &[T]) -> Result<String> {
        let mut lines = Vec::with_capacity(data.len() + 1);
        lines.push(csv_row(&T::headers()));
        for item in data {
            lines.push(csv_row(&item.fields()));
        }
        Ok(lines.join("\n"))
    }

    /// Format data as a YAML sequence
    fn format_as_yaml<T: Serialize>(&self, data: &[T]) -> Result<String> {
        Ok(serde_yaml::to_string(data)?.trim_end().to_string())
    }

    /// Format data as a compact JSON array
    fn format_as_json<T: Serialize>(&self, data: &[T]) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }

    /// Format data as plain `key: value` lines, one record per line
    fn format_as_text<T: Tabled>(&self, data: &[T]) -> Result<String> {
        let lines: Vec<String> = data
            .iter()
            .map(|item| {
                item.fields()
                    .iter()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>()
                    .join(": ")
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row(fields: &[std::borrow::Cow<'_, str>]) -> String {
    fields
        .iter()
        .map(|field| csv_escape(field))
        .collect::<Vec<_>>()
        .join(",")
}
