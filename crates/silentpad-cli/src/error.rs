use std::io;

use silentpad_core::{AuthError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] silentpad_core::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Please write something first")]
    EmptyNote,
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(String),
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Nothing to change; pass --title and/or --content")]
    NothingToEdit,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Refusing to erase notes without --yes")]
    ConfirmationRequired,
}

impl CliError {
    /// Extra guidance printed after the error message
    pub fn hint(&self) -> Option<String> {
        let error = match self {
            Self::Core(error) | Self::Auth(AuthError::Storage(error)) => error,
            _ => return None,
        };
        match error.kind() {
            ErrorKind::StorageCorrupt if error.is_corrupt_note_data() => Some(
                "The note list is unreadable. `silentpad reset --yes` erases it and starts over."
                    .to_string(),
            ),
            ErrorKind::StorageCorrupt => error.corrupt_key().map(|key| {
                format!(
                    "`{key}.json` in the data directory is unreadable. \
                     Repair or remove that file; `reset` only clears notes."
                )
            }),
            ErrorKind::StorageUnavailable => Some(
                "Check that the data directory exists and is writable (see --data-dir)."
                    .to_string(),
            ),
            _ => None,
        }
    }
}
