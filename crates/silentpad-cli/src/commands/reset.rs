use silentpad_core::kv::KeyValueStore;
use silentpad_core::AppServices;

use crate::error::CliError;

pub fn run_reset<S: KeyValueStore>(app: &AppServices<S>, confirmed: bool) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::ConfirmationRequired);
    }
    app.notes.reset()?;
    println!("All notes erased");
    Ok(())
}
