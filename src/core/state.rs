//! Accumulating grid state
//!
//! `TerminalState` owns the lines written so far, the cursor, and the current
//! style. It applies parser actions in order. Lines are only ever appended,
//! never removed, so the grid doubles as the full output history of a stream.

use crate::config::GridConfig;
use crate::parser::{Action, Direction, EraseMode, SgrAttribute};

use super::cell::Cell;
use super::cursor::Cursor;
use super::line::Line;
use super::snapshot::Snapshot;
use super::style::Style;

/// Default grid width in columns
pub const DEFAULT_WIDTH: usize = 80;

/// Default distance between tab stops
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// The grid of styled lines produced by a stream of actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    lines: Vec<Line>,
    cursor: Cursor,
    style: Style,
    width: usize,
    tab_width: usize,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalState {
    /// Create an 80-column state with a single empty line
    pub fn new() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }

    /// Create a state with a custom width (at least one column)
    pub fn with_width(width: usize) -> Self {
        Self {
            lines: vec![Line::new()],
            cursor: Cursor::default(),
            style: Style::default(),
            width: width.max(1),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        let mut state = Self::with_width(config.width);
        state.tab_width = config.tab_width.max(1);
        state
    }

    /// Apply one action produced by the parser
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Print(c) => self.print(c),
            Action::CarriageReturn => self.carriage_return(),
            Action::LineFeed => self.line_feed(),
            Action::Backspace => self.backspace(),
            Action::Tab => self.tab(),
            Action::CursorMove { direction, count } => self.move_cursor(direction, count),
            Action::CursorPosition { row, col } => self.set_cursor_position(row, col),
            Action::EraseInLine(mode) => self.erase_in_line(mode),
            Action::EraseInDisplay(mode) => self.erase_in_display(mode),
            Action::SetStyle(attrs) => self.set_style(&attrs),
        }
    }

    // === Action handlers ===

    /// Write a character at the cursor with the current style, wrapping first
    /// when the cursor sits past the last column.
    pub fn print(&mut self, c: char) {
        if self.cursor.col >= self.width {
            self.next_line();
        }
        let cell = Cell::new(c, self.style);
        self.lines[self.cursor.row].put(self.cursor.col, cell);
        self.cursor.col += 1;
    }

    pub fn carriage_return(&mut self) {
        self.cursor.carriage_return();
    }

    /// Move to the start of the next line, appending one at the bottom
    pub fn line_feed(&mut self) {
        self.next_line();
    }

    pub fn backspace(&mut self) {
        self.cursor.move_left(1);
    }

    /// Advance to the next tab stop
    pub fn tab(&mut self) {
        let next = (self.cursor.col / self.tab_width + 1) * self.tab_width;
        self.cursor.col = next.min(self.width);
    }

    /// Relative movement, clamped to the existing lines and the grid width
    pub fn move_cursor(&mut self, direction: Direction, count: usize) {
        match direction {
            Direction::Up => self.cursor.move_up(count),
            Direction::Down => self.cursor.move_down(count, self.last_row()),
            Direction::Forward => self.cursor.move_right(count, self.width),
            Direction::Back => self.cursor.move_left(count),
        }
    }

    /// Absolute movement (0-indexed), clamped like relative movement
    pub fn set_cursor_position(&mut self, row: usize, col: usize) {
        let max_row = self.last_row();
        self.cursor.goto(row, col, max_row, self.width);
    }

    pub fn erase_in_line(&mut self, mode: EraseMode) {
        self.erase_line(self.cursor.row, mode);
    }

    pub fn erase_in_display(&mut self, mode: EraseMode) {
        let row = self.cursor.row;
        match mode {
            EraseMode::ToEnd => {
                self.erase_line(row, EraseMode::ToEnd);
                for r in row + 1..self.lines.len() {
                    self.erase_line(r, EraseMode::All);
                }
            }
            EraseMode::ToStart => {
                for r in 0..row {
                    self.erase_line(r, EraseMode::All);
                }
                self.erase_line(row, EraseMode::ToStart);
            }
            EraseMode::All => {
                for r in 0..self.lines.len() {
                    self.erase_line(r, EraseMode::All);
                }
            }
        }
    }

    /// Combine SGR attributes into the current style. Printed cells keep the
    /// style they were written with.
    pub fn set_style(&mut self, attrs: &[SgrAttribute]) {
        self.style = self.style.apply(attrs);
    }

    /// Drop all content and return to the initial state
    pub fn clear(&mut self) {
        tracing::debug!(lines = self.lines.len(), "clearing terminal state");
        self.lines.clear();
        self.lines.push(Line::new());
        self.cursor = Cursor::default();
        self.style = Style::default();
    }

    // === Queries ===

    /// All lines written so far, oldest first
    pub fn visible_lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Get the cell at a position; `None` for implicit blanks and rows that
    /// do not exist
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.lines.get(row).and_then(|line| line.cell(col))
    }

    /// Plain text of the grid: every line trimmed of trailing whitespace,
    /// joined with `\n`
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_style(&self) -> Style {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(self)
    }

    // === Helpers ===

    fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    fn next_line(&mut self) {
        if self.cursor.row == self.last_row() {
            self.lines.push(Line::new());
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    fn erase_line(&mut self, row: usize, mode: EraseMode) {
        let col = self.cursor.col;
        let width = self.width;
        let bg = self.style.bg;
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        match mode {
            EraseMode::ToEnd => line.erase(col, width, bg),
            EraseMode::ToStart => line.erase(0, (col + 1).min(width), bg),
            EraseMode::All => line.erase(0, width, bg),
        }
    }
}
