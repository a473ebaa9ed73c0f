//! Configuration file loading.

use crate::error::ConfigError;
use crate::resolve::resolve_codec;
use crate::types::{CodecConfig, EmberConfig};
use std::path::Path;

/// Loads and validates `<project_dir>/ember.toml`.
pub fn load_config(project_dir: &Path) -> Result<CodecConfig, ConfigError> {
    let config_path = project_dir.join("ember.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `ember.toml` configuration from a string.
///
/// A file without a `[codec]` section yields the default settings.
pub fn load_config_from_str(content: &str) -> Result<CodecConfig, ConfigError> {
    let config: EmberConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    resolve_codec(&config.codec)
}
