//! Terminal Core Module
//!
//! Platform-independent grid state. This module contains:
//! - Style and color values applied to printed characters
//! - Cell representation
//! - Lines and the cursor
//! - The accumulating grid state that applies parser actions
//! - Deterministic snapshot generation
//!
//! The core is deterministic: given the same sequence of actions, it always
//! produces the same state.

mod cell;
mod cursor;
mod line;
mod snapshot;
mod state;
mod style;

pub use cell::Cell;
pub use cursor::Cursor;
pub use line::Line;
pub use snapshot::Snapshot;
pub use state::{TerminalState, DEFAULT_TAB_WIDTH, DEFAULT_WIDTH};
pub use style::{Color, Style};
