//! Reading and writing translation files.

use log::{debug, info, warn};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use transync_core::Group;

/// A translation file as found before the run.
#[derive(Debug, Clone, Default)]
pub struct PersistedFile {
    /// Exact file bytes, when the file exists and could be read.
    pub raw: Option<Vec<u8>>,
    /// Normalized tree; empty when the file is missing or malformed.
    pub tree: Group,
}

/// Read a persisted translation file.
///
/// Missing, unreadable and malformed files all yield an empty tree; only the
/// log level differs. A leading UTF-8 byte order mark is ignored.
pub fn read_persisted(path: &Path) -> PersistedFile {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no persisted translations (path={})", path.display());
            return PersistedFile::default();
        }
        Err(err) => {
            warn!(
                "failed to read translations; starting empty (path={}, error={})",
                path.display(),
                err
            );
            return PersistedFile::default();
        }
    };

    let tree = parse_tree(path, &raw);
    PersistedFile {
        raw: Some(raw),
        tree,
    }
}

fn parse_tree(path: &Path, raw: &[u8]) -> Group {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text.strip_prefix('\u{feff}').unwrap_or(text),
        Err(err) => {
            warn!(
                "translations are not valid UTF-8; starting empty (path={}, error={})",
                path.display(),
                err
            );
            return Group::new();
        }
    };

    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            if !value.is_object() {
                warn!(
                    "persisted translations are not an object; starting empty (path={})",
                    path.display()
                );
            }
            Group::from_persisted(&value)
        }
        Err(err) => {
            warn!(
                "failed to parse translations; starting empty (path={}, error={})",
                path.display(),
                err
            );
            Group::new()
        }
    }
}

/// Create a directory and its parents if missing.
///
/// Returns whether the directory had to be created. An existing directory,
/// including one created concurrently, is not an error.
pub fn ensure_dir(dir: &Path) -> std::io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    info!("created directory: {}", dir.display());
    Ok(true)
}

/// Replace a file's contents through a temporary sibling.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let temp_path = temp_path(path);
    let result = write_then_rename(&temp_path, path, contents);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_then_rename(temp_path: &Path, path: &Path, contents: &str) -> std::io::Result<()> {
    {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(temp_path, path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Barrier;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty() {
        let temp = tempdir().expect("tempdir");
        let persisted = read_persisted(&temp.path().join("missing.json"));
        assert!(persisted.raw.is_none());
        assert!(persisted.tree.is_empty());
    }

    #[test]
    fn malformed_file_is_empty_but_raw_is_kept() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("translation.json");
        fs::write(&path, "{ not json").expect("write");

        let persisted = read_persisted(&path);
        assert_eq!(persisted.raw.as_deref(), Some(b"{ not json".as_slice()));
        assert!(persisted.tree.is_empty());
    }

    #[test]
    fn valid_file_is_normalized() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("translation.json");
        fs::write(&path, r#"{"bird":{"budgie":"Mi periquito"}}"#).expect("write");

        let persisted = read_persisted(&path);
        assert_eq!(
            persisted.tree.to_value(),
            json!({ "bird": { "budgie": "Mi periquito" } })
        );
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("translation.json");
        fs::write(&path, "\u{feff}{\"bird\":{\"budgie\":\"Mi periquito es...\"}}").expect("write");

        let persisted = read_persisted(&path);
        assert_eq!(
            persisted.tree.to_value(),
            json!({ "bird": { "budgie": "Mi periquito es..." } })
        );
    }

    #[test]
    fn invalid_utf8_is_empty_but_raw_is_kept() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("translation.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        let persisted = read_persisted(&path);
        assert_eq!(persisted.raw.as_deref(), Some([0xff, 0xfe, 0x00].as_slice()));
        assert!(persisted.tree.is_empty());
    }

    #[test]
    fn ensure_dir_tolerates_existing() {
        let temp = tempdir().expect("tempdir");
        let dir = temp.path().join("a").join("b");
        assert_eq!(ensure_dir(&dir).expect("create"), true);
        assert_eq!(ensure_dir(&dir).expect("exists"), false);
    }

    #[test]
    fn ensure_dir_tolerates_concurrent_creators() {
        let temp = tempdir().expect("tempdir");
        let dir = temp.path().join("locales").join("es");
        let barrier = Barrier::new(2);

        let results: Vec<std::io::Result<bool>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..2)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        ensure_dir(&dir)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("join"))
                .collect()
        });

        for result in results {
            assert!(result.is_ok(), "{result:?}");
        }
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_fails_when_a_file_is_in_the_way() {
        let temp = tempdir().expect("tempdir");
        let blocker = temp.path().join("es");
        fs::write(&blocker, "").expect("write");
        assert!(ensure_dir(&blocker).is_err());
    }

    #[test]
    fn write_atomic_replaces_contents() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("translation.json");
        fs::write(&path, "old").expect("write");

        write_atomic(&path, "new").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
        assert!(!temp.path().join("translation.json.tmp").exists());
    }
}
