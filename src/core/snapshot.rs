//! Deterministic snapshot generation
//!
//! Snapshots capture the grid in a serializable format for host renderers and
//! golden tests. Given the same input stream, the state must produce identical
//! snapshots regardless of how the stream was chunked.

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::line::Line;
use super::state::TerminalState;

/// A complete snapshot of the grid content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid width in columns
    pub width: usize,
    pub cursor: Cursor,
    /// Every line, oldest first. Only materialized cells are stored.
    pub lines: Vec<Line>,
}

impl Snapshot {
    /// Create a snapshot from the current state
    pub fn from_state(state: &TerminalState) -> Self {
        Snapshot {
            width: state.width(),
            cursor: state.cursor(),
            lines: state.visible_lines().to_vec(),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Per-line text with trailing whitespace removed
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    /// Compare grid content, ignoring the cursor
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.width == other.width && self.lines == other.lines
    }
}
