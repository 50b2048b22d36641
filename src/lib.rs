//! termgrid: ANSI output interpretation engine
//!
//! Turns raw process output (shells, build tools, compilers, VCS clients)
//! containing ANSI/VT100 escape sequences into a styled grid of text that a
//! host can render or inspect. The crate provides:
//!
//! - `core`: Style and cell values, lines, cursor, and the accumulating grid state
//! - `parser`: resumable escape-sequence parser producing grid actions
//! - `config`: grid configuration loading
//!
//! ```
//! use termgrid::{AnsiParser, TerminalState};
//!
//! let mut state = TerminalState::new();
//! let mut parser = AnsiParser::new();
//!
//! parser.parse("\x1b[32mok\x1b[0m build ", &mut state);
//! parser.parse("finished\n", &mut state);
//!
//! assert_eq!(state.to_text(), "ok build finished\n");
//! ```

pub mod config;
pub mod core;
pub mod parser;

pub use config::{ConfigError, GridConfig};
pub use crate::core::{Cell, Color, Cursor, Line, Snapshot, Style, TerminalState};
pub use parser::{Action, AnsiParser, Direction, EraseMode, SgrAttribute};
