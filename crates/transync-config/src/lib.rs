//! Configuration models, layered config loading and translation schema files.
//!
//! This crate owns the transync config schema, validation, layer merging and
//! the loader that turns a JSON5 schema file into a `transync_core::Schema`.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Layered config types, loader options and schema file loading.
pub use loader::{
    ConfigLayer, ConfigLayerSource, DEFAULT_CONFIG_FILE, LayeredConfig, LayeredConfigOptions,
    load_translation_schema, parse_translation_schema,
};
/// Configuration schema models.
pub use model::*;
