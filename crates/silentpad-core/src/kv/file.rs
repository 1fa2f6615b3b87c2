//! File-backed key-value namespaces
//!
//! ```text
//! <data_dir>/
//! ├── notes_prefs.json
//! ├── silentpad_auth.json
//! ├── user_prefs.json
//! └── app_settings.json
//! ```
//!
//! Every namespace file is a JSON object of string values. Writes go to a
//! temporary file in the same directory which is then renamed over the
//! original, so a crash mid-write leaves the previous contents intact.

use std::collections::{BTreeMap, HashMap};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;

use super::KeyValueStore;
use crate::error::{Error, Result};

type Entries = BTreeMap<String, String>;

/// Opens file-backed namespaces under one data directory
#[derive(Clone, Debug)]
pub struct KvBackend {
    data_dir: PathBuf,
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl KvBackend {
    /// Open the backend, creating the data directory if it doesn't exist
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;
        tracing::debug!("Opened key-value backend at {}", data_dir.display());
        Ok(Self {
            data_dir,
            locks: Arc::default(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Handle to one namespace; handles for the same name share a write lock
    pub fn namespace(&self, name: &str) -> FileKvStore {
        let lock = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_default()
            .clone();
        FileKvStore {
            namespace: name.to_string(),
            path: self.data_dir.join(format!("{name}.json")),
            lock,
        }
    }
}

/// One namespace persisted as a JSON object file
#[derive(Clone, Debug)]
pub struct FileKvStore {
    namespace: String,
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileKvStore {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_entries(&self) -> Result<Entries> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == IoErrorKind::NotFound => return Ok(Entries::new()),
            Err(error) => return Err(error.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|error| {
            tracing::warn!(
                "Namespace file {} is not a valid JSON object: {}",
                self.path.display(),
                error
            );
            Error::corrupt(&self.namespace, error)
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::InvalidInput(format!("{} has no parent", self.path.display())))?;
        std::fs::create_dir_all(dir)?;

        let serialized = serde_json::to_string_pretty(entries)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serialized.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|error| error.error)?;

        tracing::debug!(
            "Wrote {} keys to namespace '{}'",
            entries.len(),
            self.namespace
        );
        Ok(())
    }

    fn update(&self, mutate: impl FnOnce(&mut Entries)) -> Result<()> {
        let _guard = self.guard();
        let mut entries = self.read_entries()?;
        mutate(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.guard();
        Ok(self.read_entries()?.remove(key))
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.update(|map| {
            for (key, value) in entries {
                map.insert((*key).to_string(), (*value).to_string());
            }
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|map| {
            map.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.guard();
        self.write_entries(&Entries::new())
    }
}
