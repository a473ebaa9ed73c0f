//! Parsing and validation of `ember.toml` codec configuration.
//!
//! The `[codec]` section selects the native word size used by the integer
//! and two-plane vector encodings, the two-plane bit pattern assigned to X
//! and Z, and the capacity policy of encoder scratch buffers.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use resolve::resolve_codec;
pub use types::*;
