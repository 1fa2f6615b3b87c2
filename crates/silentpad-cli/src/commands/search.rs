use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, Note};

use crate::commands::common::{print_notes, search_query};
use crate::error::CliError;

pub fn run_search<S: KeyValueStore>(
    app: &AppServices<S>,
    query: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let notes = search_notes(app, query)?;
    print_notes(&notes, as_json)
}

pub fn search_notes<S: KeyValueStore>(
    app: &AppServices<S>,
    query: &str,
) -> Result<Vec<Note>, CliError> {
    Ok(app.notes.search(search_query(query)?)?)
}
