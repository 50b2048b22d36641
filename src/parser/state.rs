//! Parser State Machine
//!
//! Converts a character stream containing ANSI escape sequences into grid
//! actions. The parser keeps only the sequence currently in flight, so input
//! may be split at any point between calls.
//!
//! States:
//! - Ground: Normal text processing
//! - Escape: After ESC, waiting for the next character
//! - Csi: After CSI (ESC [), collecting parameters up to the final byte
//! - CsiIgnore: Skipping a malformed CSI sequence up to its final byte
//! - OscString: Swallowing an OSC payload up to BEL or ST
//!
//! Every state handles every character class; unsupported sequences are
//! dropped without producing an action.

use crate::core::TerminalState;

use super::action::{c0, Action, Direction, EraseMode, SgrAttribute};
use super::params::Params;
use super::utf8::{Utf8Decoder, Utf8Result, REPLACEMENT_CHARACTER};

/// Longest OSC payload kept for tracing; the rest is dropped
const MAX_OSC_LEN: usize = 1024;

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
    CsiIgnore,
    OscString,
}

/// Resumable ANSI escape-sequence parser
#[derive(Debug, Clone)]
pub struct AnsiParser {
    state: State,
    /// Parameters for the CSI sequence in flight
    params: Params,
    /// Whether the CSI sequence started with a private marker (`?<=>`)
    private_marker: bool,
    /// Whether the CSI sequence contains an intermediate byte
    intermediate: bool,
    /// OSC string payload
    osc_string: String,
    /// Pending bytes of a split character (byte input only)
    utf8: Utf8Decoder,
}

impl Default for AnsiParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiParser {
    /// Create a new parser in the ground state
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            params: Params::new(),
            private_marker: false,
            intermediate: false,
            osc_string: String::new(),
            utf8: Utf8Decoder::new(),
        }
    }

    /// Drop any sequence in flight and return to the ground state
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.clear_params();
        self.osc_string.clear();
        self.utf8.reset();
    }

    /// Whether the parser is between sequences
    pub fn is_ground(&self) -> bool {
        self.state == State::Ground && !self.utf8.is_pending()
    }

    /// Parse a chunk of text and apply the resulting actions to `state`
    pub fn parse(&mut self, input: &str, state: &mut TerminalState) {
        for c in input.chars() {
            self.emit(c, state);
        }
    }

    /// Parse a chunk of raw bytes. Characters split across chunks are held
    /// until complete; malformed UTF-8 prints U+FFFD.
    pub fn parse_bytes(&mut self, data: &[u8], state: &mut TerminalState) {
        for &byte in data {
            let mut result = self.utf8.feed(byte);
            if result == Utf8Result::Interrupted {
                self.emit(REPLACEMENT_CHARACTER, state);
                result = self.utf8.feed(byte);
            }
            match result {
                Utf8Result::Pending => {}
                Utf8Result::Char(c) => self.emit(c, state),
                Utf8Result::Invalid | Utf8Result::Interrupted => {
                    self.emit(REPLACEMENT_CHARACTER, state)
                }
            }
        }
    }

    /// Parse a chunk of text, returning the actions instead of applying them
    pub fn actions(&mut self, input: &str) -> Vec<Action> {
        input.chars().filter_map(|c| self.advance(c)).collect()
    }

    fn emit(&mut self, c: char, state: &mut TerminalState) {
        if let Some(action) = self.advance(c) {
            state.apply(action);
        }
    }

    /// Process a single character
    fn advance(&mut self, c: char) -> Option<Action> {
        match c {
            // CAN, SUB - cancel current sequence
            c0::CAN | c0::SUB => {
                if self.state != State::Ground {
                    tracing::trace!(state = ?self.state, "sequence cancelled");
                }
                self.state = State::Ground;
                None
            }
            // ESC always starts a new sequence, abandoning any in flight.
            // Inside an OSC string this is the first half of ST (ESC \).
            c0::ESC => {
                if matches!(self.state, State::Csi | State::CsiIgnore) {
                    tracing::trace!(params = ?self.params, "CSI sequence interrupted by ESC");
                }
                self.state = State::Escape;
                None
            }
            _ => match self.state {
                State::Ground => self.process_ground(c),
                State::Escape => self.process_escape(c),
                State::Csi => self.process_csi(c),
                State::CsiIgnore => self.process_csi_ignore(c),
                State::OscString => self.process_osc_string(c),
            },
        }
    }

    /// Process characters in ground state (normal text)
    fn process_ground(&mut self, c: char) -> Option<Action> {
        match c {
            c0::CR => Some(Action::CarriageReturn),
            c0::LF | c0::VT | c0::FF => Some(Action::LineFeed),
            c0::BS => Some(Action::Backspace),
            c0::HT => Some(Action::Tab),
            // Remaining C0, DEL and C1 controls have no glyph
            c if c.is_control() => None,
            c => Some(Action::Print(c)),
        }
    }

    /// Process the character after ESC
    fn process_escape(&mut self, c: char) -> Option<Action> {
        match c {
            '[' => {
                self.clear_params();
                self.state = State::Csi;
            }
            ']' => {
                self.osc_string.clear();
                self.state = State::OscString;
            }
            // ST closing an OSC string
            '\\' => self.state = State::Ground,
            _ => {
                tracing::trace!(?c, "discarding unsupported escape sequence");
                self.state = State::Ground;
            }
        }
        None
    }

    /// Process characters inside a CSI sequence
    fn process_csi(&mut self, c: char) -> Option<Action> {
        match c {
            '0'..='9' | ';' if self.intermediate => {
                self.state = State::CsiIgnore;
                None
            }
            '0'..='9' => {
                self.params.push_digit(c as u8 - b'0');
                None
            }
            ';' => {
                self.params.separator();
                None
            }
            '?' | '<' | '=' | '>' => {
                if self.params.is_started() || self.private_marker || self.intermediate {
                    self.state = State::CsiIgnore;
                } else {
                    self.private_marker = true;
                }
                None
            }
            // Subparameters are not supported
            ':' => {
                self.state = State::CsiIgnore;
                None
            }
            '\x20'..='\x2F' => {
                self.intermediate = true;
                None
            }
            '\x40'..='\x7E' => {
                self.state = State::Ground;
                self.params.finish();
                self.dispatch_csi(c)
            }
            _ => self.process_in_sequence(c),
        }
    }

    /// Process characters of a malformed CSI sequence
    fn process_csi_ignore(&mut self, c: char) -> Option<Action> {
        match c {
            '\x40'..='\x7E' => {
                tracing::trace!(final_byte = ?c, "discarding malformed CSI sequence");
                self.state = State::Ground;
                None
            }
            '\x20'..='\x3F' => None,
            _ => self.process_in_sequence(c),
        }
    }

    /// Characters inside a CSI sequence that are not part of it: formatting
    /// controls run in place, other controls are ignored, and anything else
    /// abandons the sequence and is processed as text.
    fn process_in_sequence(&mut self, c: char) -> Option<Action> {
        match c {
            c0::CR | c0::LF | c0::BS | c0::HT => self.process_ground(c),
            c if c.is_ascii_control() => None,
            c => {
                tracing::trace!(?c, "CSI sequence abandoned");
                self.state = State::Ground;
                self.process_ground(c)
            }
        }
    }

    /// Dispatch a complete CSI sequence
    fn dispatch_csi(&mut self, final_byte: char) -> Option<Action> {
        if self.private_marker || self.intermediate {
            tracing::trace!(
                ?final_byte,
                params = ?self.params,
                private = self.private_marker,
                "discarding CSI sequence with private marker or intermediate"
            );
            return None;
        }

        let params = &self.params;
        let action = match final_byte {
            'm' => Some(Action::SetStyle(SgrAttribute::parse(params.as_slice()))),
            'A' | 'B' | 'C' | 'D' => {
                Direction::from_final(final_byte).map(|direction| Action::CursorMove {
                    direction,
                    count: usize::from(params.get_nonzero_or(0, 1)),
                })
            }
            'H' | 'f' => Some(Action::CursorPosition {
                row: usize::from(params.get_nonzero_or(0, 1)) - 1,
                col: usize::from(params.get_nonzero_or(1, 1)) - 1,
            }),
            'K' => EraseMode::from_param(params.get_or(0, 0)).map(Action::EraseInLine),
            'J' => EraseMode::from_param(params.get_or(0, 0)).map(Action::EraseInDisplay),
            _ => None,
        };

        if action.is_none() {
            tracing::trace!(?final_byte, params = ?self.params, "discarding unsupported CSI sequence");
        }
        action
    }

    /// Process characters in an OSC string
    fn process_osc_string(&mut self, c: char) -> Option<Action> {
        match c {
            c0::BEL => {
                tracing::trace!(payload = %self.osc_string, "discarding OSC string");
                self.osc_string.clear();
                self.state = State::Ground;
            }
            c if c.is_control() => {}
            c => {
                if self.osc_string.len() < MAX_OSC_LEN {
                    self.osc_string.push(c);
                }
            }
        }
        None
    }

    /// Clear parameter state
    fn clear_params(&mut self) {
        self.params.clear();
        self.private_marker = false;
        self.intermediate = false;
    }
}
