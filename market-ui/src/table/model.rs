//! Rows and tables.

use std::fmt;

/// One table line: an ordered sequence of cell texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a row from its cell texts.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Text of the cell at `column`, if the row has one.
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A header row followed by data rows.
///
/// Identity of a data row is its position. Rows are only ever moved, never
/// copied or edited, so a reorder keeps every row value intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Row,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from a header and data rows.
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    pub fn header(&self) -> &Row {
        &self.header
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of columns, taken from the header.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Texts of one column across all data rows.
    ///
    /// Rows without a cell in `column` are skipped.
    pub fn column(&self, column: usize) -> Vec<&str> {
        self.rows.iter().filter_map(|r| r.cell(column)).collect()
    }

    /// Move the data rows into `order`, where `order[i]` is the current index
    /// of the row that should end up at position `i`.
    ///
    /// `order` must be a permutation of `0..rows().len()`.
    pub(crate) fn reorder(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.rows.len());
        let mut slots: Vec<Option<Row>> = std::mem::take(&mut self.rows)
            .into_iter()
            .map(Some)
            .collect();
        self.rows = order.iter().filter_map(|&i| slots[i].take()).collect();
    }
}

impl fmt::Display for Table {
    /// Renders the table as left-aligned text columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.header.cells.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        for row in std::iter::once(&self.header).chain(&self.rows) {
            let line: Vec<String> = row
                .cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }
        Ok(())
    }
}
