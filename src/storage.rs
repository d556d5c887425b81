//! Key-value storage backends for local persistence.
//!
//! The history store only needs string get/set on a flat key namespace. The
//! file-backed implementation keeps one file per key under the platform data
//! directory, so a key behaves like a browser `localStorage` slot.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::error::StorageError;

/// A flat string key-value store.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if nothing was ever stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`. Last writer wins.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage rooted at the platform data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open the store at the default platform location, creating it if needed.
    pub fn open() -> Result<Self, StorageError> {
        let proj =
            ProjectDirs::from("com", "papo", "papo-client").ok_or(StorageError::DirUnavailable)?;
        Self::at(proj.data_dir().to_path_buf())
    }

    /// Open the store rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-process storage. Used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.lock().expect("storage lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_set_get() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::at(tmp.path().join("store")).unwrap();

        assert_eq!(storage.get("chat_mensagens").unwrap(), None);

        storage.set("chat_mensagens", "[]").unwrap();
        assert_eq!(storage.get("chat_mensagens").unwrap(), Some("[]".to_string()));

        storage.set("chat_mensagens", r#"[{"a":1}]"#).unwrap();
        assert_eq!(
            storage.get("chat_mensagens").unwrap(),
            Some(r#"[{"a":1}]"#.to_string())
        );
    }

    #[test]
    fn test_memory_storage_set_get() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
    }
}
