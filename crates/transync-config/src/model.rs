//! Configuration schema for transync.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use transync_core::MergePolicy;

/// Root config for a translation sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    /// Language whose file always mirrors the schema text.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Languages to synchronize, keyed by language id.
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, LanguageConfig>,
    #[serde(default)]
    pub policy: MergePolicy,
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            schema: None,
            default_language: default_language(),
            languages: default_languages(),
            policy: MergePolicy::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::new()
    }

    /// Language ids in processing order.
    pub fn language_ids(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn is_default_language(&self, language_id: &str) -> bool {
        self.default_language == language_id
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_languages() -> BTreeMap<String, LanguageConfig> {
    BTreeMap::from([(
        default_language(),
        LanguageConfig {
            native_name: "English".to_string(),
        },
    )])
}

/// Builder for assembling a `SyncConfig` in code.
#[derive(Debug, Clone)]
pub struct SyncConfigBuilder {
    config: SyncConfig,
    explicit_languages: bool,
}

impl Default for SyncConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: SyncConfig::default(),
            explicit_languages: false,
        }
    }

    /// Set the default language id.
    pub fn default_language(mut self, language_id: impl Into<String>) -> Self {
        self.config.default_language = language_id.into();
        self
    }

    /// Add a language. The first call replaces the built-in language list.
    pub fn language(mut self, language_id: impl Into<String>, native_name: impl Into<String>) -> Self {
        if !self.explicit_languages {
            self.config.languages.clear();
            self.explicit_languages = true;
        }
        self.config.languages.insert(
            language_id.into(),
            LanguageConfig {
                native_name: native_name.into(),
            },
        );
        self
    }

    /// Replace the merge policy.
    pub fn policy(mut self, policy: MergePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Replace the path configuration.
    pub fn paths(mut self, paths: PathsConfig) -> Self {
        self.config.paths = paths;
        self
    }

    /// Finalize and return the built `SyncConfig`.
    pub fn build(self) -> SyncConfig {
        self.config
    }
}

/// Display metadata for a configured language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Name of the language in the language itself (e.g. "Español").
    pub native_name: String,
}

/// Where the schema lives and where locale files are written.
///
/// Relative paths are resolved against the config's base directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_schema_path")]
    pub schema: PathBuf,
    #[serde(default = "default_locale_root")]
    pub locale_root: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schema: default_schema_path(),
            locale_root: default_locale_root(),
            file_name: default_file_name(),
        }
    }
}

impl PathsConfig {
    /// Schema file location relative to `base`.
    pub fn schema_path(&self, base: &Path) -> PathBuf {
        base.join(&self.schema)
    }

    /// Locale root relative to `base`.
    pub fn locale_root(&self, base: &Path) -> PathBuf {
        base.join(&self.locale_root)
    }
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("translations.json5")
}

fn default_locale_root() -> PathBuf {
    PathBuf::from("public").join("locales")
}

/// Default per-language file name.
fn default_file_name() -> String {
    "translation.json".to_string()
}
