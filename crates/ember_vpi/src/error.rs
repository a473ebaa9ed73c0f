//! Codec error types.
//!
//! Each variant is a contract violation that the codec refuses to paper over.
//! Every site that returns one also logs it at error level.

use crate::format::{DelayMode, ValueFormat};
use std::fmt;

/// Whether a request was reading from or writing to a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `get_value`.
    Read,
    /// `put_value`.
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => f.write_str("read"),
            Direction::Write => f.write_str("write"),
        }
    }
}

/// Errors raised by signal construction, encoding, and decoding.
#[derive(Debug, thiserror::Error)]
pub enum VpiError {
    /// An integer or vector operation on a signal wider than the native word.
    #[error("{format} value of width {width} exceeds the {word_bits}-bit native word")]
    WidthOverflow {
        /// Width of the signal.
        width: u32,
        /// Bits in the native word.
        word_bits: u32,
        /// The requested format.
        format: ValueFormat,
    },

    /// The codec does not implement this format in this direction.
    #[error("{direction} of {format} values is not implemented")]
    UnsupportedFormat {
        /// The requested format.
        format: ValueFormat,
        /// Read or write.
        direction: Direction,
    },

    /// Writes are only applied immediately.
    #[error("unsupported delay mode: {0}")]
    UnsupportedDelay(DelayMode),

    /// The bound cells do not match the declared bit range.
    #[error("range [{msb}:{lsb}] does not match {cells} bound cells")]
    RangeMismatch {
        /// Declared most significant index.
        msb: i32,
        /// Declared least significant index.
        lsb: i32,
        /// Number of cells supplied.
        cells: u32,
    },

    /// A vector write carried no words.
    #[error("vector value has no words")]
    MissingVectorWord,

    /// An internal invariant of the codec was broken.
    #[error("internal codec error: {0}")]
    Internal(String),
}
