use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, Note};

use crate::commands::common::parse_note_id;
use crate::error::CliError;

pub fn run_edit<S: KeyValueStore>(
    app: &AppServices<S>,
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<(), CliError> {
    let note = edit_note(app, id, title, content)?;
    println!("{}", note.id);
    Ok(())
}

/// Apply the given fields to a stored note in one locked store operation
pub fn edit_note<S: KeyValueStore>(
    app: &AppServices<S>,
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Note, CliError> {
    if title.is_none() && content.is_none() {
        return Err(CliError::NothingToEdit);
    }
    let note_id = parse_note_id(id)?;

    app.notes
        .update(note_id, |note| {
            if let Some(title) = title {
                note.title = title.trim().to_string();
            }
            if let Some(content) = content {
                note.content = content.to_string();
            }
            if note.is_blank() {
                return Err(CliError::EmptyNote);
            }
            Ok(())
        })?
        .ok_or_else(|| CliError::NoteNotFound(note_id.to_string()))
}
