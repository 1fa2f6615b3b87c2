use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, Profile};

use crate::cli::ProfileCommands;
use crate::error::CliError;

pub fn run_profile<S: KeyValueStore>(
    app: &AppServices<S>,
    command: Option<ProfileCommands>,
) -> Result<(), CliError> {
    let profile = match command {
        None | Some(ProfileCommands::Show) => app.profile.load()?,
        Some(ProfileCommands::Set { name, phone }) => {
            let profile = update_profile(app, name, phone)?;
            println!("Profile saved successfully");
            profile
        }
    };

    let email = app.sessions.current_email()?;
    println!("email  {}", email.as_deref().unwrap_or("-"));
    println!("name   {}", display_field(&profile.name));
    println!("phone  {}", display_field(&profile.phone));
    Ok(())
}

pub fn update_profile<S: KeyValueStore>(
    app: &AppServices<S>,
    name: Option<String>,
    phone: Option<String>,
) -> Result<Profile, CliError> {
    let mut profile = app.profile.load()?;
    if let Some(name) = name {
        profile.name = name.trim().to_string();
    }
    if let Some(phone) = phone {
        profile.phone = phone.trim().to_string();
    }
    app.profile.save(&profile)?;
    Ok(profile)
}

fn display_field(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
