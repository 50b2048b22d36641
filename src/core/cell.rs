//! Terminal Cell
//!
//! Represents a single position in the grid: a character and the style that
//! was active when it was printed.

use serde::{Deserialize, Serialize};

use super::style::{Color, Style};

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character displayed in this cell
    #[serde(rename = "ch")]
    pub character: char,
    /// Style captured at print time
    #[serde(default, skip_serializing_if = "Style::is_default")]
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Color::Default)
    }
}

impl Cell {
    /// Create a new cell with a character and style
    pub fn new(character: char, style: Style) -> Self {
        Self { character, style }
    }

    /// A blank cell carrying only a background color (used by erase operations)
    pub fn blank(bg: Color) -> Self {
        Self {
            character: ' ',
            style: Style::with_background(bg),
        }
    }

    /// Check if this cell shows nothing: a space without a background
    pub fn is_blank(&self) -> bool {
        self.character == ' ' && self.style.bg.is_default()
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn bold(&self) -> bool {
        self.style.bold
    }

    pub fn dim(&self) -> bool {
        self.style.dim
    }

    pub fn italic(&self) -> bool {
        self.style.italic
    }

    pub fn underline(&self) -> bool {
        self.style.underline
    }

    pub fn foreground(&self) -> Color {
        self.style.fg
    }

    pub fn background(&self) -> Color {
        self.style.bg
    }
}
