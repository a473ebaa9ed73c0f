//! Four-state signal value codec for the Ember procedural interface.
//!
//! This crate converts between a signal's per-bit four-state cells and the
//! encodings that interface callers exchange: native integers, binary,
//! octal, hex, decimal, and character strings, and two-plane `aval`/`bval`
//! vectors.
//!
//! # Architecture
//!
//! A [`SignalDescriptor`] binds a name and a declared bit range to a
//! [`CellRange`] in some cell network. [`ValueEncoder`] reads those cells
//! through [`CellSource`] and [`ValueDecoder`] writes them through
//! [`CellSink`]. The network itself, which owns the cells and propagates
//! changes, is supplied by the caller. [`CellNetwork`] is a small in-memory
//! implementation.
//!
//! # Usage
//!
//! ```
//! use ember_common::Logic;
//! use ember_config::CodecConfig;
//! use ember_vpi::{
//!     CellNetwork, DelayMode, PutValue, ScopeTree, SignalDescriptor, Value, ValueDecoder,
//!     ValueEncoder, ValueFormat,
//! };
//!
//! let mut net = CellNetwork::new();
//! let mut scopes = ScopeTree::new();
//! scopes.push_scope("top");
//! let bits = net.alloc(8, Logic::X);
//! let count = SignalDescriptor::make_reg(scopes.intern("count"), 7, 0, false, bits, &scopes)?;
//!
//! let config = CodecConfig::default();
//! ValueDecoder::new(config).put_value(&count, &mut net, &PutValue::Int(0xa5), DelayMode::NoDelay)?;
//!
//! let mut enc = ValueEncoder::new(config);
//! assert_eq!(enc.encode(&count, &net, ValueFormat::HexStr)?, Value::Str("A5"));
//! assert_eq!(count.full_name(&scopes), "top.count");
//! # Ok::<(), ember_vpi::VpiError>(())
//! ```
//!
//! # Modules
//!
//! - `cell`: Cell source/sink traits, strength tags, in-memory network
//! - `digit`: Octal/hex digit classification of four-state groups
//! - `scratch`: Encoder-owned output buffer
//! - `scope`: Scope resolution for hierarchical names
//! - `signal`: Signal descriptors and property queries
//! - `decimal`: Bit-vector to decimal conversion
//! - `planes`: Per-bit two-plane patterns
//! - `format`: Value formats, read results, write inputs, delay modes
//! - `encode`: Read path
//! - `decode`: Write path

#![warn(missing_docs)]

pub mod cell;
pub mod decimal;
pub mod decode;
pub mod digit;
pub mod encode;
pub mod error;
pub mod format;
pub mod planes;
pub mod scope;
pub mod scratch;
pub mod signal;

pub use cell::{CellId, CellNetwork, CellRange, CellSink, CellSource, StrengthTag};
pub use decimal::{DecimalFormatter, Radix10};
pub use decode::ValueDecoder;
pub use digit::{hex_digit, octal_digit};
pub use encode::ValueEncoder;
pub use error::{Direction, VpiError};
pub use format::{DelayMode, PutValue, Value, ValueFormat, VecVal};
pub use scope::{ScopeId, ScopeResolver, ScopeTree};
pub use scratch::ScratchBuffer;
pub use signal::{Property, SignalDescriptor, SignalKind};
