//! Grid actions produced by the parser
//!
//! Actions represent the semantic operations an escape-sequence stream asks
//! for. They are produced by the parser and applied by `TerminalState`.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// A grid action produced by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Print a character at the cursor with the current style
    Print(char),

    /// CR - move to column 0
    CarriageReturn,

    /// LF (also VT, FF) - move to the start of the next line
    LineFeed,

    /// BS - move one column left
    Backspace,

    /// HT - advance to the next tab stop
    Tab,

    /// CSI A/B/C/D - relative cursor movement
    CursorMove { direction: Direction, count: usize },

    /// CSI H/f - absolute cursor position (0-indexed)
    CursorPosition { row: usize, col: usize },

    /// CSI K - erase in line
    EraseInLine(EraseMode),

    /// CSI J - erase in display
    EraseInDisplay(EraseMode),

    /// CSI m - select graphic rendition
    SetStyle(Vec<SgrAttribute>),
}

/// Direction of a relative cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Forward,
    Back,
}

impl Direction {
    /// Map a CSI final byte (`A`..`D`) to its direction
    pub fn from_final(final_char: char) -> Option<Direction> {
        match final_char {
            'A' => Some(Direction::Up),
            'B' => Some(Direction::Down),
            'C' => Some(Direction::Forward),
            'D' => Some(Direction::Back),
            _ => None,
        }
    }
}

/// Range selector shared by erase-in-line and erase-in-display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EraseMode {
    /// 0: from the cursor to the end
    ToEnd,
    /// 1: from the start through the cursor
    ToStart,
    /// 2: everything
    All,
}

impl EraseMode {
    pub fn from_param(param: u16) -> Option<EraseMode> {
        match param {
            0 => Some(EraseMode::ToEnd),
            1 => Some(EraseMode::ToStart),
            2 => Some(EraseMode::All),
            _ => None,
        }
    }
}

/// One decoded SGR parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SgrAttribute {
    /// 0
    Reset,
    /// 1
    Bold,
    /// 2
    Dim,
    /// 3
    Italic,
    /// 4
    Underline,
    /// 22 - neither bold nor dim
    NormalIntensity,
    /// 23
    NotItalic,
    /// 24
    NotUnderline,
    /// 30-37, 39, 90-97
    Foreground(Color),
    /// 40-47, 49, 100-107
    Background(Color),
}

impl SgrAttribute {
    /// Decode an SGR parameter list. An empty list means reset.
    ///
    /// Extended colors (`38;5;n`, `38;2;r;g;b` and the `48` forms) are
    /// skipped together with their arguments; other unknown codes are dropped.
    pub fn parse(params: &[u16]) -> Vec<SgrAttribute> {
        if params.is_empty() {
            return vec![SgrAttribute::Reset];
        }

        let mut attrs = Vec::with_capacity(params.len());
        let mut i = 0;
        while i < params.len() {
            let p = params[i];
            let attr = match p {
                0 => Some(SgrAttribute::Reset),
                1 => Some(SgrAttribute::Bold),
                2 => Some(SgrAttribute::Dim),
                3 => Some(SgrAttribute::Italic),
                4 => Some(SgrAttribute::Underline),
                22 => Some(SgrAttribute::NormalIntensity),
                23 => Some(SgrAttribute::NotItalic),
                24 => Some(SgrAttribute::NotUnderline),
                30..=37 => Color::from_index((p - 30) as u8).map(SgrAttribute::Foreground),
                39 => Some(SgrAttribute::Foreground(Color::Default)),
                40..=47 => Color::from_index((p - 40) as u8).map(SgrAttribute::Background),
                49 => Some(SgrAttribute::Background(Color::Default)),
                90..=97 => Color::from_index((p - 90 + 8) as u8).map(SgrAttribute::Foreground),
                100..=107 => {
                    Color::from_index((p - 100 + 8) as u8).map(SgrAttribute::Background)
                }
                38 | 48 => {
                    i += match params.get(i + 1) {
                        Some(5) => 2,
                        Some(2) => 4,
                        _ => 0,
                    };
                    None
                }
                _ => None,
            };
            attrs.extend(attr);
            i += 1;
        }
        attrs
    }
}

/// C0 control characters
pub mod c0 {
    pub const NUL: char = '\x00';
    pub const BEL: char = '\x07';
    pub const BS: char = '\x08';
    pub const HT: char = '\x09';
    pub const LF: char = '\x0A';
    pub const VT: char = '\x0B';
    pub const FF: char = '\x0C';
    pub const CR: char = '\x0D';
    pub const CAN: char = '\x18';
    pub const SUB: char = '\x1A';
    pub const ESC: char = '\x1B';
    pub const DEL: char = '\x7F';
}
