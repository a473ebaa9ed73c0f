//! Turning the raw `[codec]` section into a validated [`CodecConfig`].

use crate::error::ConfigError;
use crate::types::{CodecConfig, CodecSection, WordSize};

/// Validates a `[codec]` section and produces the runtime settings.
pub fn resolve_codec(section: &CodecSection) -> Result<CodecConfig, ConfigError> {
    let word = WordSize::from_bits(section.word_bits).ok_or_else(|| {
        ConfigError::ValidationError(format!(
            "codec.word_bits must be 32 or 64, got {}",
            section.word_bits
        ))
    })?;
    Ok(CodecConfig {
        word,
        plane_mapping: section.plane_mapping,
        scratch: section.scratch,
    })
}
