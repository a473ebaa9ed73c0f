//! Configuration types deserialized from `ember.toml`, and the resolved
//! runtime view handed to the codec.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The top-level configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct EmberConfig {
    /// Value codec settings.
    #[serde(default)]
    pub codec: CodecSection,
}

/// The raw `[codec]` section as written in the file.
#[derive(Debug, Deserialize)]
pub struct CodecSection {
    /// Native word size in bits for integer and two-plane vector values.
    #[serde(default = "default_word_bits")]
    pub word_bits: u32,
    /// Which two-plane bit pattern represents X versus Z.
    #[serde(default)]
    pub plane_mapping: PlaneMapping,
    /// Capacity policy for encoder scratch buffers.
    #[serde(default)]
    pub scratch: ScratchPolicy,
}

impl Default for CodecSection {
    fn default() -> Self {
        Self {
            word_bits: default_word_bits(),
            plane_mapping: PlaneMapping::default(),
            scratch: ScratchPolicy::default(),
        }
    }
}

fn default_word_bits() -> u32 {
    32
}

/// The native machine word that bounds integer and vector values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordSize {
    /// 32-bit words (the procedural interface's `int`).
    #[default]
    W32,
    /// 64-bit words.
    W64,
}

impl WordSize {
    /// Maps a bit count to a word size.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(WordSize::W32),
            64 => Some(WordSize::W64),
            _ => None,
        }
    }

    /// Number of bits in the word.
    pub fn bits(self) -> u32 {
        match self {
            WordSize::W32 => 32,
            WordSize::W64 => 64,
        }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Assignment of two-plane `(aval, bval)` bit patterns to X and Z.
///
/// `0 = (0,0)` and `1 = (1,0)` under both mappings. The same table is used
/// for reading and for writing, so a vector read back from a signal and
/// written again reproduces every cell state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneMapping {
    /// IEEE 1364: `Z = (0,1)`, `X = (1,1)`.
    #[default]
    Ieee,
    /// `X = (0,1)`, `Z = (1,1)`.
    Legacy,
}

/// Capacity policy of an encoder's scratch buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScratchPolicy {
    /// Keep the largest capacity requested so far.
    #[default]
    GrowOnly,
    /// Release excess capacity down to each request.
    Exact,
}

/// Validated codec settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Native word for integer and vector encodings.
    pub word: WordSize,
    /// X/Z plane assignment.
    pub plane_mapping: PlaneMapping,
    /// Scratch buffer capacity policy.
    pub scratch: ScratchPolicy,
}

impl CodecConfig {
    /// Returns a copy with a different word size.
    pub fn with_word(mut self, word: WordSize) -> Self {
        self.word = word;
        self
    }

    /// Returns a copy with a different plane mapping.
    pub fn with_plane_mapping(mut self, plane_mapping: PlaneMapping) -> Self {
        self.plane_mapping = plane_mapping;
        self
    }

    /// Returns a copy with a different scratch policy.
    pub fn with_scratch(mut self, scratch: ScratchPolicy) -> Self {
        self.scratch = scratch;
        self
    }
}
