//! The four states a simulation cell can hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One four-state value.
///
/// The discriminant doubles as the 2-bit code cells are stored with, so
/// `value as u8` and [`Logic::code`] agree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Driven low.
    Zero = 0,
    /// Driven high.
    One = 1,
    /// Unknown.
    X = 2,
    /// Undriven.
    Z = 3,
}

impl Logic {
    /// Every state, ordered by code.
    pub const ALL: [Logic; 4] = [Logic::Zero, Logic::One, Logic::X, Logic::Z];

    /// Parses one binary-string character. Case is ignored for `x`/`z`.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_lowercase() {
            '0' => Logic::Zero,
            '1' => Logic::One,
            'x' => Logic::X,
            'z' => Logic::Z,
            _ => return None,
        })
    }

    /// State for a 2-bit code. Bits above the low two are ignored.
    pub fn from_code(code: u8) -> Self {
        Self::ALL[usize::from(code & 0b11)]
    }

    /// The 2-bit cell code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// `One` for `true`, `Zero` for `false`.
    pub fn from_bool(value: bool) -> Self {
        if value {
            Logic::One
        } else {
            Logic::Zero
        }
    }

    /// `true` for `Zero` and `One`.
    pub fn is_determinate(self) -> bool {
        self.code() < 2
    }

    /// Character used in binary strings: `0`, `1`, `x`, `z`.
    pub fn to_bin_char(self) -> char {
        b"01xz"[usize::from(self.code())] as char
    }
}

/// Uppercase form, as in waveform dumps.
impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.to_bin_char().to_ascii_uppercase();
        write!(f, "{c}")
    }
}
