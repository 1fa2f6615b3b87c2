//! Stores layered over the key-value namespaces

mod note_store;
mod profile_store;
mod settings_store;

pub use note_store::NoteStore;
pub use profile_store::ProfileStore;
pub use settings_store::SettingsStore;
