//! Store bundle shared by clients.

use std::path::Path;

use crate::auth::{CredentialHasher, SessionStore};
use crate::config::StorageConfig;
use crate::kv::{
    KeyValueStore, KvBackend, MemoryKvStore, AUTH_NAMESPACE, NOTES_NAMESPACE, PROFILE_NAMESPACE,
    SETTINGS_NAMESPACE,
};
use crate::store::{NoteStore, ProfileStore, SettingsStore};
use crate::Result;

/// Every SilentPad store wired over one backend, each in its own namespace.
///
/// Clones share storage and locks, so a bundle can be handed to several
/// callers that mutate the same data.
#[derive(Clone, Debug)]
pub struct AppServices<S: KeyValueStore> {
    pub notes: NoteStore<S>,
    pub sessions: SessionStore<S>,
    pub settings: SettingsStore<S>,
    pub profile: ProfileStore<S>,
    auth_kv: S,
}

impl<S: KeyValueStore> AppServices<S> {
    /// Wire stores over four namespace handles
    pub fn from_namespaces(notes: S, auth: S, settings: S, profile: S) -> Self {
        Self {
            notes: NoteStore::new(notes),
            sessions: SessionStore::new(auth.clone()),
            settings: SettingsStore::new(settings),
            profile: ProfileStore::new(profile),
            auth_kv: auth,
        }
    }

    /// Replace the password hasher, e.g. with cheaper parameters in tests
    #[must_use]
    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.sessions = SessionStore::with_hasher(self.auth_kv.clone(), hasher);
        self
    }
}

impl AppServices<crate::kv::FileKvStore> {
    /// Open file-backed stores under the configured data directory
    pub fn open(config: &StorageConfig) -> Result<Self> {
        Self::open_path(config.data_dir())
    }

    pub fn open_path(data_dir: &Path) -> Result<Self> {
        let backend = KvBackend::open(data_dir)?;
        Ok(Self::from_namespaces(
            backend.namespace(NOTES_NAMESPACE),
            backend.namespace(AUTH_NAMESPACE),
            backend.namespace(SETTINGS_NAMESPACE),
            backend.namespace(PROFILE_NAMESPACE),
        ))
    }
}

impl AppServices<MemoryKvStore> {
    /// Ephemeral stores (primarily for tests)
    pub fn open_in_memory() -> Self {
        Self::from_namespaces(
            MemoryKvStore::new(),
            MemoryKvStore::new(),
            MemoryKvStore::new(),
            MemoryKvStore::new(),
        )
    }
}
