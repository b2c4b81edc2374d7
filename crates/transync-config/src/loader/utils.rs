//! Path handling for locating `transync.json5` layers.

use crate::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolve the working directory the layers are discovered from.
///
/// A directory that does not exist yet is kept as given so that its
/// (absent) layers are simply skipped.
pub(super) fn normalize_path(cwd: &Path) -> Result<PathBuf, ConfigError> {
    cwd.canonicalize().or_else(|err| match err.kind() {
        ErrorKind::NotFound => Ok(cwd.to_path_buf()),
        _ => Err(ConfigError::ReadFailed(err)),
    })
}

/// Key used to load a config file at most once when two layers point at it.
pub(super) fn unique_path(layer_path: &Path) -> PathBuf {
    layer_path
        .canonicalize()
        .unwrap_or_else(|_| layer_path.to_path_buf())
}

/// Nearest ancestor of `cwd` (itself included) holding one of `markers`,
/// usually the repository checkout that owns the locale files.
pub(super) fn find_project_root(cwd: &Path, markers: &[String]) -> Option<PathBuf> {
    cwd.ancestors()
        .find(|dir| markers.iter().any(|marker| dir.join(marker).exists()))
        .map(Path::to_path_buf)
}
