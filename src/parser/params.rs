//! CSI parameter accumulation
//!
//! CSI sequences carry numeric parameters separated by semicolons. Empty
//! parameters read as 0; callers decide what 0 means for each final byte.
//! Values saturate at `u16::MAX` and at most `MAX_PARAMS` are kept, so
//! hostile input cannot grow the parser.

use std::fmt;

pub const MAX_PARAMS: usize = 32;

#[derive(Clone)]
pub struct Params {
    params: [u16; MAX_PARAMS],
    len: usize,
    /// Parameter currently being built
    current: u16,
    /// Whether a digit or separator has been seen since the last clear
    started: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl Params {
    pub fn new() -> Self {
        Params {
            params: [0; MAX_PARAMS],
            len: 0,
            current: 0,
            started: false,
        }
    }

    /// Append a decimal digit to the parameter being built
    pub fn push_digit(&mut self, digit: u8) {
        self.current = self
            .current
            .saturating_mul(10)
            .saturating_add(u16::from(digit));
        self.started = true;
    }

    /// Close the current parameter (`;`)
    pub fn separator(&mut self) {
        self.push(self.current);
        self.current = 0;
        self.started = true;
    }

    /// Close the trailing parameter once the final byte arrives.
    /// `1;` yields `[1, 0]`; no digits at all yields an empty list.
    pub fn finish(&mut self) {
        if self.started {
            self.push(self.current);
            self.current = 0;
            self.started = false;
        }
    }

    /// Whether any digit or separator has been accumulated
    pub fn is_started(&self) -> bool {
        self.started || self.len > 0
    }

    fn push(&mut self, value: u16) {
        if self.len < MAX_PARAMS {
            self.params[self.len] = value;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<u16> {
        self.as_slice().get(index).copied()
    }

    pub fn get_or(&self, index: usize, default: u16) -> u16 {
        self.get(index).unwrap_or(default)
    }

    /// Get a parameter where both "missing" and `0` mean `default`
    pub fn get_nonzero_or(&self, index: usize, default: u16) -> u16 {
        match self.get(index) {
            Some(0) | None => default,
            Some(v) => v,
        }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.params[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.current = 0;
        self.started = false;
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
            && self.current == other.current
            && self.started == other.started
    }
}

impl Eq for Params {}
