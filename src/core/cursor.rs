//! Cursor state management
//!
//! The cursor is the write position `(row, col)` in the grid. Rows index
//! existing lines; the column may sit one past the last cell of the line
//! width, meaning the next print wraps.

use serde::{Deserialize, Serialize};

/// Cursor position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Row position (0-indexed from the first line)
    pub row: usize,
    /// Column position (0-indexed)
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move cursor up by n rows, stopping at the first row
    pub fn move_up(&mut self, n: usize) {
        self.row = self.row.saturating_sub(n);
    }

    /// Move cursor down by n rows, clamping to max_row
    pub fn move_down(&mut self, n: usize, max_row: usize) {
        self.row = self.row.saturating_add(n).min(max_row);
    }

    /// Move cursor left by n columns
    pub fn move_left(&mut self, n: usize) {
        self.col = self.col.saturating_sub(n);
    }

    /// Move cursor right by n columns, clamping to max_col
    pub fn move_right(&mut self, n: usize, max_col: usize) {
        self.col = self.col.saturating_add(n).min(max_col);
    }

    /// Move cursor to absolute position, clamping to bounds
    pub fn goto(&mut self, row: usize, col: usize, max_row: usize, max_col: usize) {
        self.row = row.min(max_row);
        self.col = col.min(max_col);
    }

    /// Move cursor to beginning of current line
    pub fn carriage_return(&mut self) {
        self.col = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default() {
        let cursor = Cursor::default();
        assert_eq!(cursor, Cursor::new(0, 0));
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut cursor = Cursor::new(5, 10);

        cursor.move_up(3);
        assert_eq!(cursor.row, 2);
        cursor.move_up(10);
        assert_eq!(cursor.row, 0);

        cursor.move_down(4, 3);
        assert_eq!(cursor.row, 3);

        cursor.move_left(4);
        assert_eq!(cursor.col, 6);
        cursor.move_left(100);
        assert_eq!(cursor.col, 0);

        cursor.move_right(200, 80);
        assert_eq!(cursor.col, 80);
    }

    #[test]
    fn test_cursor_move_saturates() {
        let mut cursor = Cursor::new(1, 1);
        cursor.move_down(usize::MAX, 7);
        cursor.move_right(usize::MAX, 80);
        assert_eq!(cursor, Cursor::new(7, 80));
    }

    #[test]
    fn test_cursor_goto() {
        let mut cursor = Cursor::default();
        cursor.goto(10, 20, 4, 80);
        assert_eq!(cursor, Cursor::new(4, 20));

        cursor.carriage_return();
        assert_eq!(cursor.col, 0);
    }
}
