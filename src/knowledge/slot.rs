//! Durable key slots the knowledge corpus is persisted into.
//!
//! A slot maps a string key to one serialized value. The store only ever
//! uses a single key, but slots are keyed so several assistants can share a
//! directory (or a process) without clobbering each other.
//!
//! - [`FileSlot`] — `<dir>/<key>.json`, written synchronously.
//! - [`TmpSlot`]  — process memory; discarded on exit.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::AppError;

/// Pluggable persistence backend for serialized corpora.
pub trait Slot: Send + Sync {
    /// Backend name for logs (e.g. `"file"`).
    fn slot_type(&self) -> &str;

    /// Returns the stored value, or `None` when nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replaces the stored value.
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// One JSON file per key under `dir`.
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Slot for FileSlot {
    fn slot_type(&self) -> &str {
        "file"
    }

    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Knowledge(format!("cannot read {}: {e}", path.display()))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::Knowledge(format!("cannot create {}: {e}", self.dir.display()))
        })?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| AppError::Knowledge(format!("cannot write {}: {e}", path.display())))
    }
}

/// Ephemeral in-memory slot.
#[derive(Default)]
pub struct TmpSlot {
    data: Mutex<HashMap<String, String>>,
}

impl TmpSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slot for TmpSlot {
    fn slot_type(&self) -> &str {
        "tmp"
    }

    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let data = self
            .data
            .lock()
            .map_err(|_| AppError::Knowledge("tmp slot lock poisoned".into()))?;
        Ok(data.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::Knowledge("tmp slot lock poisoned".into()))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_slot_missing_key_reads_none() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path());
        assert_eq!(slot.read("absent").unwrap(), None);
    }

    #[test]
    fn file_slot_creates_dir_on_write() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path().join("nested").join("kb"));
        slot.write("k", "[]").unwrap();
        assert!(slot.path_for("k").is_file());
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_slot_write_replaces_value() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path());
        slot.write("k", "one").unwrap();
        slot.write("k", "two").unwrap();
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn file_slot_write_into_file_path_errors() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        let slot = FileSlot::new(&blocker);
        let err = slot.write("k", "[]").unwrap_err();
        assert!(err.to_string().contains("knowledge error"));
    }

    #[test]
    fn tmp_slot_keys_are_independent() {
        let slot = TmpSlot::new();
        slot.write("a", "1").unwrap();
        slot.write("b", "2").unwrap();
        assert_eq!(slot.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(slot.read("b").unwrap().as_deref(), Some("2"));
        assert_eq!(slot.read("c").unwrap(), None);
    }
}
