//! Error types for config and schema loading.

use thiserror::Error;

/// Failures while loading `transync.json5` layers or the translation schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer or schema file exists but could not be read.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// The file is not valid JSON5.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// The merged layers do not fit the config model.
    #[error("failed to decode config: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// One setting is wrong; `path` is `layer:dotted.key` or a bare key.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// The config as a whole is unusable, e.g. no languages.
    #[error("invalid config: {0}")]
    Invalid(String),
}
