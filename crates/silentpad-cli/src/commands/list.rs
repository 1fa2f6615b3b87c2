use silentpad_core::kv::KeyValueStore;
use silentpad_core::AppServices;

use crate::commands::common::print_notes;
use crate::error::CliError;

pub fn run_list<S: KeyValueStore>(
    app: &AppServices<S>,
    limit: usize,
    as_json: bool,
) -> Result<(), CliError> {
    let mut notes = app.notes.get_all()?;
    notes.truncate(limit);
    print_notes(&notes, as_json)
}
