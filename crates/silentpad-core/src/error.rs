//! Error types for silentpad-core

use thiserror::Error;

use crate::kv::{NOTES_KEY, NOTES_NAMESPACE};

/// Result type alias using silentpad-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in silentpad-core storage operations
#[derive(Error, Debug)]
pub enum Error {
    /// A persisted payload exists but cannot be decoded
    #[error("Stored data under '{key}' is unreadable: {reason}")]
    StorageCorrupt { key: String, reason: String },

    /// The platform storage could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StorageCorrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Key or namespace whose stored payload could not be decoded
    pub fn corrupt_key(&self) -> Option<&str> {
        match self {
            Self::StorageCorrupt { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    /// Whether the unreadable data is the note list, which a note reset clears
    pub fn is_corrupt_note_data(&self) -> bool {
        self.corrupt_key()
            .is_some_and(|key| key == NOTES_KEY || key == NOTES_NAMESPACE)
    }

    /// Coarse classification used by callers deciding how to react.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::StorageCorrupt { .. } | Self::Serialization(_) => ErrorKind::StorageCorrupt,
            Self::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            Self::InvalidInput(_) => ErrorKind::Validation,
        }
    }
}

/// Error taxonomy shared by the note and session stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad email format, short password, blank fields
    Validation,
    /// Unknown account or note
    NotFound,
    /// Account already exists
    Conflict,
    /// Persisted blob is malformed
    StorageCorrupt,
    /// Read or write failed at the platform level
    StorageUnavailable,
    /// Password hashing itself failed (parameters, randomness)
    Internal,
}
