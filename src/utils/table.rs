//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    /// Columns sized to their headers; rows widen them as they are added.
    pub fn with_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.as_ref().to_string(),
                    width: h.as_ref().width(),
                })
                .collect(),
        )
    }

    pub fn separator(mut self, c: char) -> Self {
        self.separator = c;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(cell.lines().map(|l| l.width()).max().unwrap_or(0));
        }
        self.rows.push(row);
    }

    /// Wrap every cell to at most `max` display columns.
    pub fn wrap(&mut self, max: usize) {
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                if cell.width() > max {
                    *cell = textwrap::wrap(cell, max).join("\n");
                }
            }
        }
        for (i, col) in self.columns.iter_mut().enumerate() {
            let widest = self
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .flat_map(|c| c.lines())
                .map(|l| l.width())
                .max()
                .unwrap_or(0);
            col.width = widest.max(col.header.width());
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            push_padded(&mut out, &col.header, col.width);
        }
        out.push('\n');
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows; wrapped cells span several physical lines
        for row in &self.rows {
            let height = row.iter().map(|c| c.lines().count().max(1)).max().unwrap_or(1);
            for line in 0..height {
                for (i, col) in self.columns.iter().enumerate() {
                    let text = row
                        .get(i)
                        .and_then(|c| c.lines().nth(line))
                        .unwrap_or("");
                    push_padded(&mut out, text, col.width);
                }
                out.push('\n');
            }
        }

        out
    }
}

fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let pad = width.saturating_sub(text.width()) + 1;
    out.push_str(&" ".repeat(pad));
}
