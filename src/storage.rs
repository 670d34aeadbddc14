//! Key-value persistence for the progress blob.
//!
//! ```text
//! GameStore<S>  load()/save(&GameData), never fails, logs instead
//!     |
//! KeyValueStore get/set raw strings, reports StorageError
//!     |-- FileStore    <dir>/<key>.json, atomic temp file + rename
//!     `-- MemoryStore  HashMap behind a mutex
//! ```

use crate::constants::{APP_DIR_NAME, STORAGE_KEY};
use crate::error::{StorageError, StorageResult};
use crate::perf::measure_and_log;
use crate::progress::GameData;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

/// Saves slower than this are logged.
const SAVE_WARN_MS: f64 = 50.0;

/// A string-keyed, string-valued durable store.
pub trait KeyValueStore {
    /// The stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

fn io_error(
    operation: &'static str,
    path: &Path,
) -> impl FnOnce(std::io::Error) -> StorageError + use<> {
    let path = path.to_path_buf();
    move |source| StorageError::Io {
        operation,
        path,
        source,
    }
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<platform data dir>/candy-abacus`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(base.join(APP_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                operation: "read",
                path,
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(io_error("create directory", &self.dir))?;

        // Temp file in the same directory so the rename stays on one filesystem
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(io_error("create", &self.dir))?;
        temp.write_all(value.as_bytes())
            .map_err(io_error("write", temp.path()))?;
        temp.as_file()
            .sync_all()
            .map_err(io_error("sync", temp.path()))?;
        temp.persist(&path).map_err(|source| StorageError::Persist {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}

/// In-process store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one raw value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves [`GameData`] under one key. Never fails: errors are
/// logged and the default state stands in.
#[derive(Debug)]
pub struct GameStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored progress, `None` if nothing was saved yet.
    fn read(&self) -> StorageResult<Option<GameData>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        Ok(Some(GameData::from_stored(value)))
    }

    fn write(&self, data: &GameData) -> StorageResult<()> {
        let json = serde_json::to_string(data)?;
        self.store.set(&self.key, &json)
    }

    pub fn load(&self) -> GameData {
        match self.read() {
            Ok(Some(data)) => data,
            Ok(None) => {
                debug!(key = %self.key, "No saved progress, starting fresh");
                GameData::default()
            }
            Err(e @ StorageError::Json(_)) => {
                warn!(key = %self.key, error = %e, "Saved progress is unreadable, using defaults");
                GameData::default()
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to read saved progress");
                GameData::default()
            }
        }
    }

    pub fn save(&self, data: &GameData) {
        measure_and_log("save_progress", SAVE_WARN_MS, || {
            if let Err(e) = self.write(data) {
                error!(key = %self.key, error = %e, "Failed to save progress");
            }
        });
    }
}
