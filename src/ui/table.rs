//! Table rendering for listings.

use console::{measure_text_width, pad_str, truncate_str, Alignment};

/// A box-drawn table. Widths are measured on screen, so wide characters
/// and styled cells line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<Option<usize>>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            max_widths: vec![None; headers.len()],
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    /// Truncate cells of `column` to `width` columns with an ellipsis.
    pub fn with_max_width(mut self, column: usize, width: usize) -> Self {
        if let Some(slot) = self.max_widths.get_mut(column) {
            *slot = Some(width);
        }
        self
    }

    /// Add a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell(&self, row: &[String], column: usize) -> String {
        let text = row.get(column).map(String::as_str).unwrap_or("");
        match self.max_widths[column] {
            Some(max) => truncate_str(text, max, "…").into_owned(),
            None => text.to_string(),
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| measure_text_width(&self.cell(row, col)))
                    .chain(std::iter::once(measure_text_width(&self.headers[col])))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = vec![
            border(&widths, '┌', '┬', '┐'),
            render_row(&self.headers, &widths),
            border(&widths, '├', '┼', '┤'),
        ];

        for row in &self.rows {
            let cells: Vec<String> = (0..widths.len()).map(|c| self.cell(row, c)).collect();
            lines.push(render_row(&cells, &widths));
        }

        lines.push(border(&widths, '└', '┴', '┘'));
        lines.join("\n")
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(
            " {} │",
            pad_str(cell, *width, Alignment::Left, None)
        ));
    }
    line
}
