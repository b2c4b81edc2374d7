//! On-disk layout of per-language translation files.

use std::path::{Path, PathBuf};

/// Resolves `<root>/<language_id>/<file_name>` paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLayout {
    root: PathBuf,
    file_name: String,
}

impl LocaleLayout {
    pub fn new(root: impl AsRef<Path>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file_name: file_name.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one language's files.
    pub fn language_dir(&self, language_id: &str) -> PathBuf {
        self.root.join(language_id)
    }

    /// Translation file for one language.
    pub fn translation_path(&self, language_id: &str) -> PathBuf {
        self.language_dir(language_id).join(&self.file_name)
    }
}
