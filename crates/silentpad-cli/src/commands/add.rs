use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, Note};

use crate::commands::common::resolve_note_content;
use crate::error::CliError;

pub fn run_add<S: KeyValueStore>(
    app: &AppServices<S>,
    title: &str,
    content_parts: &[String],
) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;
    let note = add_note(app, title, &content)?;

    println!("{}", note.id);
    Ok(())
}

pub fn add_note<S: KeyValueStore>(
    app: &AppServices<S>,
    title: &str,
    content: &str,
) -> Result<Note, CliError> {
    let title = title.trim();
    if title.is_empty() && content.is_empty() {
        return Err(CliError::EmptyNote);
    }
    Ok(app.notes.create(title, content)?)
}
