//! Loading the translation schema from a JSON5 file.

use super::schema::invalid_field;
use crate::ConfigError;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;
use transync_core::{Schema, SchemaError};

/// Load the translation schema from a JSON5 file.
///
/// Every value must be a string (default-language text) or a nested object.
pub fn load_translation_schema(path: impl AsRef<Path>) -> Result<Schema, ConfigError> {
    let path = path.as_ref();
    info!("loading translation schema: {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_translation_schema(&contents, &format!("schema({})", path.display()))
}

/// Parse a translation schema from JSON5 contents. `label` prefixes error paths.
pub fn parse_translation_schema(contents: &str, label: &str) -> Result<Schema, ConfigError> {
    let value: Value = json5::from_str(contents)?;
    let schema = Schema::from_value(&value).map_err(|err| schema_error(label, err))?;
    debug!(
        "translation schema parsed (groups={})",
        schema.root().len()
    );
    Ok(schema)
}

fn schema_error(label: &str, err: SchemaError) -> ConfigError {
    match err {
        SchemaError::NotAnObject => invalid_field(label, "", "expected object"),
        SchemaError::InvalidValue { path, found } => invalid_field(
            label,
            &path,
            &format!("expected string or object, found {found}"),
        ),
        SchemaError::InvalidKey { path } => {
            invalid_field(label, &path, "keys must be non-empty and must not contain `.`")
        }
        SchemaError::Conflict { path } => {
            invalid_field(label, &path, "conflicting schema definition")
        }
    }
}
