//! # Durable Key-Value Storage
//!
//! Favorites, preferences and recent searches survive restarts through a tiny
//! string-keyed store. Values are JSON-encoded.
//!
//! `FileStore` keeps one file per key under `~/.wildlife/storage/`
//! (`<key>.json`). Writes use atomic rename (write `.tmp`, then `rename()`).
//! Keys are written independently: there is no transaction across keys, and
//! the last writer wins.
//!
//! Callers go through [`load_json`] / [`save_json`], which log failures
//! instead of returning them. Storage is a convenience, never a reason to
//! fail an in-memory update.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod keys {
    pub const FAVORITES: &str = "wildlife-favorites";
    pub const THEME: &str = "wildlife-theme";
    pub const AUTOPLAY: &str = "wildlife-autoplay";
    pub const SOUND: &str = "wildlife-sound";
    pub const ANIMATIONS: &str = "wildlife-animations";
    pub const LANGUAGE: &str = "wildlife-language";
    pub const RECENT_SEARCHES: &str = "wildlife-recent-searches";
}

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Json(e) => write!(f, "storage JSON error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

pub trait KeyValueStore {
    /// Raw JSON text stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ============================================================================
// File-backed store
// ============================================================================

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        atomic_write(&self.path_for(key), value)?;
        Ok(())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Volatile store, used when no storage directory is available and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// When set, every `set` fails. Lets tests prove failures never leak.
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io(io::Error::other("writes disabled")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Typed helpers
// ============================================================================

/// Reads and decodes `key`. Missing keys are `None`; unreadable or malformed
/// values are logged and also treated as `None`, so defaults apply.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed value for {}: {}", key, e);
            None
        }
    }
}

/// Encodes and writes `value` under `key`. Returns whether the write landed;
/// failures are logged, never propagated.
pub fn save_json<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| store.set(key, &json));
    match result {
        Ok(()) => {
            debug!("Persisted {}", key);
            true
        }
        Err(e) => {
            warn!("Failed to persist {}: {}", key, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_store_dir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(save_json(&mut store, keys::LANGUAGE, "en"));
        let lang: Option<String> = load_json(&store, keys::LANGUAGE);
        assert_eq!(lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let value: Option<bool> = load_json(&store, keys::SOUND);
        assert!(value.is_none());
    }

    #[test]
    fn test_malformed_value_is_none() {
        let mut store = MemoryStore::new();
        store.set(keys::AUTOPLAY, "not json").unwrap();
        let value: Option<bool> = load_json(&store, keys::AUTOPLAY);
        assert!(value.is_none());
    }

    #[test]
    fn test_failed_write_reports_false() {
        let mut store = MemoryStore::failing();
        assert!(!save_json(&mut store, keys::THEME, "light"));
        assert!(store.get(keys::THEME).unwrap().is_none());
    }

    #[test]
    fn test_file_store_writes_one_file_per_key() {
        let dir = temp_store_dir();
        let mut store = FileStore::open(&dir).unwrap();
        assert!(save_json(&mut store, keys::FAVORITES, &vec!["1", "3"]));
        assert!(save_json(&mut store, keys::THEME, "dark"));

        assert!(dir.join("wildlife-favorites.json").exists());
        assert!(dir.join("wildlife-theme.json").exists());
        assert!(!dir.join("wildlife-favorites.tmp").exists());

        let reopened = FileStore::open(&dir).unwrap();
        let favorites: Option<Vec<String>> = load_json(&reopened, keys::FAVORITES);
        assert_eq!(favorites, Some(vec!["1".to_string(), "3".to_string()]));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = temp_store_dir();
        let store = FileStore::open(&dir).unwrap();
        assert!(store.get(keys::SOUND).unwrap().is_none());
        let _ = fs::remove_dir_all(dir);
    }
}
