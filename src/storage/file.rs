use async_trait::async_trait;
use fs2::FileExt;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// JSON-file backed store.
///
/// The file holds a single object mapping keys to string values. Writes
/// hold an exclusive lock on `<file>.lock`, rewrite a temp sibling, then
/// rename it over the original so a crash never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn lock_path(&self) -> PathBuf {
        sibling(&self.path, "lock")
    }

    fn tmp_path(&self) -> PathBuf {
        sibling(&self.path, "tmp")
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn get_blocking(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }))
    }

    fn set_blocking(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.io_error(e))?;
        lock.lock_exclusive().map_err(|e| self.io_error(e))?;

        let result = self.write_locked(key, value);
        let _ = FileExt::unlock(&lock);
        result
    }

    fn write_locked(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        let encoded = serde_json::to_vec_pretty(&Value::Object(map))?;

        let tmp = self.tmp_path();
        let mut file = File::create(&tmp).map_err(|e| self.io_error(e))?;
        file.write_all(&encoded).map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || store.get_blocking(&key)).await?
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let store = self.clone();
        let key = key.to_string();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || store.set_blocking(&key, &value)).await?
    }
}

fn sibling(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(extension);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sibling_appends_extension() {
        let path = Path::new("/data/storage.json");
        assert_eq!(sibling(path, "lock"), PathBuf::from("/data/storage.json.lock"));
    }

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get_blocking("beerCount").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_dirs_and_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("storage.json"));

        store.set_blocking("beerCount", "3").unwrap();
        store.set_blocking("startTime", "2024-01-01T12:00:00.000Z").unwrap();
        store.set_blocking("beerCount", "4").unwrap();

        assert_eq!(store.get_blocking("beerCount").unwrap().as_deref(), Some("4"));
        assert_eq!(
            store.get_blocking("startTime").unwrap().as_deref(),
            Some("2024-01-01T12:00:00.000Z")
        );
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn non_object_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get_blocking("beerCount"),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn numeric_values_read_as_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"beerCount": 7}"#).unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get_blocking("beerCount").unwrap().as_deref(), Some("7"));
    }
}
