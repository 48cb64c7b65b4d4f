//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table: a row-major grid of cells.
///
/// Rows are not guaranteed to have equal column counts, and cells may
/// contain nested tables to arbitrary depth. The structure is a strict
/// tree; there are no back-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell: one or more paragraphs plus any nested tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Paragraphs in the cell
    pub paragraphs: Vec<Paragraph>,

    /// Tables nested inside the cell
    pub tables: Vec<Table>,
}

impl TableCell {
    /// Create a new cell with one plain-text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            tables: Vec::new(),
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self {
            paragraphs: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            tables: Vec::new(),
        }
    }

    /// Nest a table inside the cell.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get plain text content (paragraphs only).
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell has no content at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.is_empty()) && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["Name", "Age"]));
        table.add_row(TableRow::from_strings(["Alice", "30", "extra"]));

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_nested_table() {
        let mut inner = Table::new();
        inner.add_row(TableRow::from_strings(["«City»"]));

        let mut cell = TableCell::text("outer");
        cell.add_table(inner);

        let mut outer = Table::new();
        outer.add_row(TableRow::new(vec![cell]));

        assert_eq!(outer.rows[0].cells[0].tables.len(), 1);
        assert_eq!(outer.plain_text(), "outer");
    }

    #[test]
    fn test_cell_text() {
        let cell = TableCell::text("Hello");
        assert_eq!(cell.plain_text(), "Hello");
        assert!(!cell.is_empty());
        assert!(TableCell::empty().is_empty());
    }
}
