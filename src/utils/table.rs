//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header, separator line and rows.
    /// `colored` holds the cells to print (possibly with ANSI codes); the
    /// plain `rows` give the widths used for padding.
    pub fn render_colored(&self, colored: &[Vec<String>]) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for (plain_row, colored_row) in self.rows.iter().zip(colored) {
            for (i, col) in self.columns.iter().enumerate() {
                let plain = plain_row.get(i).map(String::as_str).unwrap_or("");
                let shown = colored_row.get(i).map(String::as_str).unwrap_or(plain);
                let pad = col.width.saturating_sub(unicode_width::UnicodeWidthStr::width(plain));
                out.push_str(shown);
                out.push_str(&" ".repeat(pad + 1));
            }
            out.push('\n');
        }

        out
    }
}
