//! ANSI escape sequence parser
//!
//! A resumable parser that converts text (or raw bytes) into grid actions.
//! Loosely follows the VT500-series parser model from
//! <https://vt100.net/emu/dec_ansi_parser>, reduced to the sequences that
//! matter for build and shell output.

mod action;
mod params;
mod state;
mod utf8;

pub use action::{c0, Action, Direction, EraseMode, SgrAttribute};
pub use params::{Params, MAX_PARAMS};
pub use state::AnsiParser;
pub use utf8::{Utf8Decoder, Utf8Result, REPLACEMENT_CHARACTER};
