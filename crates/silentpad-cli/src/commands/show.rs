use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, Note};

use crate::commands::common::parse_note_id;
use crate::error::CliError;

pub fn run_show<S: KeyValueStore>(app: &AppServices<S>, id: &str) -> Result<(), CliError> {
    let note = find_note(app, id)?;

    println!("{}", note.display_title());
    println!("{}", note.formatted_timestamp());
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }
    Ok(())
}

pub fn find_note<S: KeyValueStore>(app: &AppServices<S>, id: &str) -> Result<Note, CliError> {
    let note_id = parse_note_id(id)?;
    app.notes
        .get_by_id(note_id)?
        .ok_or_else(|| CliError::NoteNotFound(note_id.to_string()))
}
