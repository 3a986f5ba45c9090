//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading configuration.
///
/// Lookups are deliberately not represented here: a missing key is an
/// expected outcome answered by the caller's default, and a type mismatch
/// at read time resolves silently to that default as well.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A command-line token did not look like a `-key` or `--key` flag.
    #[error("argument invalid: {token:?}")]
    MalformedArgument { token: String },

    /// A `-key` flag was the last token, leaving no value to pair with it.
    #[error("no value specified for key {key:?}")]
    MissingValue { key: String },

    /// A YAML config file could not be opened.
    #[error("failed to open config file {}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML document could not be decoded into a mapping.
    #[error("failed to decode YAML document")]
    Decode(#[from] serde_yaml::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
