//! Schema validation helpers for transync JSON5 configuration.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Validate a single config layer against the schema.
///
/// Layers are partial: every key is optional, but present keys must have the
/// right shape.
pub(super) fn validate_layer_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    let allowed = [
        "$schema",
        "default_language",
        "languages",
        "policy",
        "paths",
    ];
    ensure_allowed_keys(map, &allowed, layer, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, layer, "$schema")?;
    }
    if let Some(value) = map.get("default_language") {
        expect_string(value, layer, "default_language")?;
    }
    if let Some(value) = map.get("languages") {
        validate_languages(value, layer, "languages")?;
    }
    if let Some(value) = map.get("policy") {
        validate_policy(value, layer, "policy")?;
    }
    if let Some(value) = map.get("paths") {
        validate_paths(value, layer, "paths")?;
    }

    Ok(())
}

/// Validate the "languages" block: a map of language id to metadata.
fn validate_languages(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    for (language_id, entry) in map {
        let entry_path = join_path(path, language_id);
        let entry_map = expect_object(entry, layer, &entry_path)?;
        ensure_allowed_keys(entry_map, &["native_name"], layer, &entry_path)?;

        let name_path = join_path(&entry_path, "native_name");
        let Some(name) = entry_map.get("native_name") else {
            return Err(invalid_field(layer, &name_path, "missing required field"));
        };
        expect_string(name, layer, &name_path)?;
    }
    Ok(())
}

/// Validate the "policy" block.
fn validate_policy(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(
        map,
        &["keep_unrecognized_keys", "keep_existing_translations"],
        layer,
        path,
    )?;
    if let Some(value) = map.get("keep_unrecognized_keys") {
        expect_bool(value, layer, &join_path(path, "keep_unrecognized_keys"))?;
    }
    if let Some(value) = map.get("keep_existing_translations") {
        expect_bool(value, layer, &join_path(path, "keep_existing_translations"))?;
    }
    Ok(())
}

/// Validate the "paths" block.
fn validate_paths(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["schema", "locale_root", "file_name"], layer, path)?;
    for key in ["schema", "locale_root", "file_name"] {
        if let Some(value) = map.get(key) {
            expect_non_empty_string(value, layer, &join_path(path, key))?;
        }
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(layer, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected string"))
    }
}

fn expect_non_empty_string(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    match value.as_str() {
        Some(text) if !text.trim().is_empty() => Ok(()),
        Some(_) => Err(invalid_field(layer, path, "expected non-empty string")),
        None => Err(invalid_field(layer, path, "expected string")),
    }
}

/// Expect a JSON boolean or return a typed error.
fn expect_bool(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if matches!(value, Value::Bool(_)) {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected bool"))
    }
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    layer: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(layer, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
pub(super) fn invalid_field(layer: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{layer}:{normalized_path}"),
        message: message.to_string(),
    }
}
