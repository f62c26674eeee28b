//! Table types.

use super::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// Always a rectangular grid: rows are padded with empty cells up to the
/// widest row during conversion, so ragged source rows never survive into
/// the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Table alignment within the page
    pub alignment: Alignment,

    /// Whether the table carries full grid borders
    pub grid_borders: bool,
}

impl Table {
    /// Create a new empty table (centered, with grid borders).
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            alignment: Alignment::Center,
            grid_borders: true,
        }
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

    /// Get a cell by row and column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Check if any cell is a header cell.
    pub fn has_header(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(|c| c.is_header)
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

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content as a single paragraph of runs
    pub paragraph: Paragraph,

    /// Whether this was a header (`th`) cell
    pub is_header: bool,
}

impl TableCell {
    /// Create a cell from a paragraph.
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraph,
            is_header: false,
        }
    }

    /// Create a header cell from a paragraph.
    pub fn header(paragraph: Paragraph) -> Self {
        Self {
            paragraph,
            is_header: true,
        }
    }

    /// Create a structurally present but empty cell.
    pub fn empty() -> Self {
        Self {
            paragraph: Paragraph::new(),
            is_header: false,
        }
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.paragraph.plain_text()
    }

    /// Check if the cell has no visible text.
    pub fn is_empty(&self) -> bool {
        self.paragraph.is_empty()
    }
}
