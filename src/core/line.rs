//! Terminal line representation
//!
//! A line is a growable row of cells. Cells past the end of the vector are
//! implicit blanks: they are only materialized once a print or an erase with
//! a background color reaches them.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::style::Color;

/// A row of cells in the grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// Create an empty line (every cell is an implicit blank)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of materialized cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to a cell at the given column
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Get all materialized cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write a cell at `col`, padding with default blanks if the column is
    /// past the materialized end.
    pub fn put(&mut self, col: usize, cell: Cell) {
        if col < self.cells.len() {
            self.cells[col] = cell;
        } else {
            self.cells.resize(col, Cell::default());
            self.cells.push(cell);
        }
    }

    /// Blank the cells in `start..end` with the given background.
    ///
    /// With the default background only materialized cells are touched, since
    /// anything beyond them is already blank. A colored background is painted
    /// through `end`, growing the line as needed.
    pub fn erase(&mut self, start: usize, end: usize, bg: Color) {
        let end = if bg.is_default() {
            end.min(self.cells.len())
        } else {
            if self.cells.len() < end {
                self.cells.resize(end, Cell::default());
            }
            end
        };
        if start >= end {
            return;
        }
        for cell in &mut self.cells[start..end] {
            *cell = Cell::blank(bg);
        }
    }

    /// Characters of this line with trailing whitespace removed
    pub fn text(&self) -> String {
        let s: String = self.cells.iter().map(|c| c.character).collect();
        s.trim_end().to_string()
    }

    /// Check if the line shows nothing
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }
}
