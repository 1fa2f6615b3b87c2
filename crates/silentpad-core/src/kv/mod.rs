//! Flat key-value persistence shared by every store
//!
//! Each store owns one namespace: a string-to-string map that is read and
//! written as a whole. Structured values (the note list) are stored as JSON
//! strings under a single key.

mod file;
mod memory;

pub use file::{FileKvStore, KvBackend};
pub use memory::MemoryKvStore;

use crate::error::Result;

/// Namespace holding the serialized note list
pub const NOTES_NAMESPACE: &str = "notes_prefs";
/// Key under [`NOTES_NAMESPACE`] holding the note list as a JSON array
pub const NOTES_KEY: &str = "notes_list";
/// Namespace holding credentials and the logged-in email
pub const AUTH_NAMESPACE: &str = "silentpad_auth";
/// Namespace holding profile fields
pub const PROFILE_NAMESPACE: &str = "user_prefs";
/// Namespace holding app settings
pub const SETTINGS_NAMESPACE: &str = "app_settings";

/// Trait for namespace-scoped key-value storage
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write several values in one commit
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()>;

    /// Remove a key; absent keys are not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in the namespace
    fn clear(&self) -> Result<()>;

    /// Write a single value
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)])
    }

    /// Check whether a key is present
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}
