//! Streaming UTF-8 decoding for byte input
//!
//! Multi-byte characters may be split across chunks; the decoder keeps the
//! partial sequence until the remaining bytes arrive.

/// Replacement for malformed sequences
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// UTF-8 decoder state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utf8Decoder {
    /// Bytes accumulated for current character
    buffer: [u8; 4],
    /// Number of bytes in buffer
    len: usize,
    /// Expected total bytes for current character
    expected: usize,
}

/// Result of feeding a byte to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Result {
    /// Need more bytes
    Pending,
    /// Successfully decoded a character
    Char(char),
    /// The byte completed or started a malformed sequence and was consumed
    Invalid,
    /// The byte cut a pending sequence short. The pending bytes are dropped
    /// and the byte itself was NOT consumed; feed it again.
    Interrupted,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partial sequence
    pub fn reset(&mut self) {
        self.len = 0;
        self.expected = 0;
    }

    /// Check if decoder is in the middle of a sequence
    pub fn is_pending(&self) -> bool {
        self.len > 0
    }

    /// Feed a byte to the decoder
    pub fn feed(&mut self, byte: u8) -> Utf8Result {
        if self.len == 0 {
            return self.start(byte);
        }

        if byte & 0b1100_0000 != 0b1000_0000 {
            self.reset();
            return Utf8Result::Interrupted;
        }

        self.buffer[self.len] = byte;
        self.len += 1;

        if self.len < self.expected {
            return Utf8Result::Pending;
        }

        let result = match std::str::from_utf8(&self.buffer[..self.len]) {
            Ok(s) => s
                .chars()
                .next()
                .map_or(Utf8Result::Invalid, Utf8Result::Char),
            Err(_) => Utf8Result::Invalid,
        };

        self.reset();
        result
    }

    fn start(&mut self, byte: u8) -> Utf8Result {
        let expected = match byte {
            0x00..=0x7F => return Utf8Result::Char(byte as char),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            // Continuation bytes, overlong leads (C0, C1) and F5+
            _ => return Utf8Result::Invalid,
        };
        self.buffer[0] = byte;
        self.len = 1;
        self.expected = expected;
        Utf8Result::Pending
    }
}
