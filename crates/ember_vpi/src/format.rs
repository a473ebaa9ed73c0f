//! Value encodings exchanged with procedural-interface callers.

use ember_common::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every value format a caller can name.
///
/// Only a subset is implemented by the signal codec; the rest exist so that
/// a request for them can be refused explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Binary digit string, `0 1 x z`.
    BinStr,
    /// Octal digit string.
    OctStr,
    /// Decimal digit string.
    DecStr,
    /// Hexadecimal digit string.
    HexStr,
    /// Single four-state scalar.
    Scalar,
    /// Native signed integer.
    Int,
    /// Floating point.
    Real,
    /// Character string, 8 bits per character.
    String,
    /// Two-plane `aval`/`bval` word array.
    Vector,
    /// Per-bit strength values.
    Strength,
    /// Simulation time.
    Time,
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueFormat::BinStr => "binary string",
            ValueFormat::OctStr => "octal string",
            ValueFormat::DecStr => "decimal string",
            ValueFormat::HexStr => "hex string",
            ValueFormat::Scalar => "scalar",
            ValueFormat::Int => "integer",
            ValueFormat::Real => "real",
            ValueFormat::String => "character string",
            ValueFormat::Vector => "vector",
            ValueFormat::Strength => "strength",
            ValueFormat::Time => "time",
        };
        f.write_str(name)
    }
}

/// One word of a two-plane vector.
///
/// Bit `i` of `aval` and bit `i` of `bval` together carry one four-state
/// value. Only the low `word_bits` of each plane are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VecVal {
    /// Value plane.
    pub aval: u64,
    /// Unknown/high-impedance plane.
    pub bval: u64,
}

impl VecVal {
    /// Creates a word from its two planes.
    pub fn new(aval: u64, bval: u64) -> Self {
        Self { aval, bval }
    }

    /// Returns the `(aval, bval)` bits at `pos`.
    pub fn planes_at(&self, pos: u32) -> (bool, bool) {
        ((self.aval >> pos) & 1 != 0, (self.bval >> pos) & 1 != 0)
    }
}

/// A value read from a signal.
///
/// String and vector payloads borrow the encoder's scratch storage and stay
/// valid until the encoder's next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    /// Native integer.
    Int(i64),
    /// Binary, octal, decimal or hex digit string.
    Str(&'a str),
    /// Character string bytes, most significant character first.
    Chars(&'a [u8]),
    /// Two-plane words, least significant word first.
    Vector(&'a [VecVal]),
}

impl<'a> Value<'a> {
    /// Returns the integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the digit string payload, if any.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the character string payload, if any.
    pub fn as_chars(&self) -> Option<&'a [u8]> {
        match self {
            Value::Chars(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the vector payload, if any.
    pub fn as_vector(&self) -> Option<&'a [VecVal]> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }
}

/// A value supplied by a caller for writing into a signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PutValue<'a> {
    /// Native integer, two's complement.
    Int(i64),
    /// Four-state scalar, written to bit 0.
    Scalar(Logic),
    /// Two-plane words, least significant word first.
    Vector(&'a [VecVal]),
    /// A digit or character string tagged with its format.
    Text {
        /// The string's encoding.
        format: ValueFormat,
        /// The string contents.
        text: &'a str,
    },
    /// Floating point.
    Real(f64),
}

impl PutValue<'_> {
    /// The format this value is expressed in.
    pub fn format(&self) -> ValueFormat {
        match self {
            PutValue::Int(_) => ValueFormat::Int,
            PutValue::Scalar(_) => ValueFormat::Scalar,
            PutValue::Vector(_) => ValueFormat::Vector,
            PutValue::Text { format, .. } => *format,
            PutValue::Real(_) => ValueFormat::Real,
        }
    }
}

/// Scheduling mode requested for a write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayMode {
    /// Apply immediately.
    #[default]
    NoDelay,
    /// Inertial delay.
    Inertial,
    /// Transport delay.
    Transport,
    /// Pure transport delay.
    PureTransport,
}

impl fmt::Display for DelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DelayMode::NoDelay => "no delay",
            DelayMode::Inertial => "inertial delay",
            DelayMode::Transport => "transport delay",
            DelayMode::PureTransport => "pure transport delay",
        };
        f.write_str(name)
    }
}
