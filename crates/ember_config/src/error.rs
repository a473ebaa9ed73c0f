//! Errors raised while reading `ember.toml`.

/// Why an `ember.toml` could not be turned into codec settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read ember.toml: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid TOML or has a field of the wrong type.
    #[error("malformed ember.toml: {0}")]
    ParseError(String),

    /// A field parsed but holds an unsupported value.
    #[error("unsupported codec setting: {0}")]
    ValidationError(String),
}
