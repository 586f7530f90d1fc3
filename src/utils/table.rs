//! Table rendering utilities for CLI outputs.
//! Column widths are computed from the content in display cells, so mixed
//! CJK/ASCII rows stay aligned. A column may wrap long cells onto
//! continuation lines instead of stretching the table.

use crate::utils::formatting::{display_width, pad_display};

pub struct Column {
    pub header: String,
    /// Wrap cell text at this display width; None keeps cells on one line.
    pub wrap_at: Option<usize>,
}

impl Column {
    pub fn new<S: Into<String>>(header: S) -> Self {
        Self {
            header: header.into(),
            wrap_at: None,
        }
    }

    pub fn wrapped<S: Into<String>>(header: S, wrap_at: usize) -> Self {
        Self {
            header: header.into(),
            wrap_at: Some(wrap_at),
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Split one cell into its visual lines, honoring the column wrap width.
    fn cell_lines(&self, col: usize, cell: &str) -> Vec<String> {
        match self.columns[col].wrap_at {
            Some(width) if !cell.is_empty() => textwrap::wrap(cell, width)
                .into_iter()
                .map(|line| line.into_owned())
                .collect(),
            _ => vec![cell.to_string()],
        }
    }

    pub fn render(&self) -> String {
        // Pre-wrap every cell, then size columns on the wrapped lines.
        let wrapped: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| self.cell_lines(i, cell))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content_max = wrapped
                    .iter()
                    .flat_map(|row| row[i].iter())
                    .map(|line| display_width(line))
                    .max()
                    .unwrap_or(0);
                content_max.max(display_width(&col.header))
            })
            .collect();

        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&pad_display(&col.header, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        // Separator
        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows (one output line per visual line)
        for row in &wrapped {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line_no in 0..height {
                for (i, cell) in row.iter().enumerate() {
                    let text = cell.get(line_no).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_display(text, widths[i]));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
