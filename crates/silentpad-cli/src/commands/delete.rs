use silentpad_core::kv::KeyValueStore;
use silentpad_core::AppServices;

use crate::commands::common::parse_note_id;
use crate::error::CliError;

pub fn run_delete<S: KeyValueStore>(app: &AppServices<S>, id: &str) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    if app.notes.delete(note_id)? {
        println!("{note_id}");
    } else {
        println!("No note with id {note_id}");
    }
    Ok(())
}
