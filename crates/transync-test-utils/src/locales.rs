//! Temporary locale directories.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used by every fixture language.
pub const TRANSLATION_FILE: &str = "translation.json";

/// A scratch locale root that is removed on drop.
pub struct LocaleFixture {
    temp: TempDir,
}

impl LocaleFixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("tempdir"),
        }
    }

    /// Locale root (`<tmp>/public/locales`); not created until written to.
    pub fn root(&self) -> PathBuf {
        self.temp.path().join("public").join("locales")
    }

    pub fn base_dir(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, language_id: &str) -> PathBuf {
        self.root().join(language_id).join(TRANSLATION_FILE)
    }

    /// Write raw contents to a language file, creating directories.
    pub fn write_raw(&self, language_id: &str, contents: &str) {
        let path = self.path(language_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("dir");
        }
        fs::write(path, contents).expect("write");
    }

    pub fn write(&self, language_id: &str, value: &Value) {
        let contents = serde_json::to_string_pretty(value).expect("json");
        self.write_raw(language_id, &contents);
    }

    pub fn read_raw(&self, language_id: &str) -> String {
        fs::read_to_string(self.path(language_id)).expect("read")
    }

    pub fn read(&self, language_id: &str) -> Value {
        serde_json::from_str(&self.read_raw(language_id)).expect("parse")
    }

    pub fn exists(&self, language_id: &str) -> bool {
        self.path(language_id).exists()
    }
}

impl Default for LocaleFixture {
    fn default() -> Self {
        Self::new()
    }
}
