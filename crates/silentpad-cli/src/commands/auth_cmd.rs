use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, Session};

use crate::cli::AuthCommands;
use crate::error::CliError;

pub fn run_auth<S: KeyValueStore>(
    app: &AppServices<S>,
    command: AuthCommands,
) -> Result<(), CliError> {
    match command {
        AuthCommands::Register { email, password } => {
            app.sessions.register(&email, &password)?;
            println!("Registered and signed in as {email}");
        }
        AuthCommands::Login { email, password } => {
            app.sessions.login(&email, &password)?;
            println!("Signed in as {email}");
        }
        AuthCommands::Logout => {
            app.sessions.logout()?;
            println!("Logged out successfully");
        }
        AuthCommands::Status => match app.sessions.current_session()? {
            Session::LoggedIn(email) => println!("Signed in as {email}"),
            Session::LoggedOut => println!("Not signed in"),
        },
        AuthCommands::Passwd {
            current,
            new,
            confirm,
        } => {
            app.sessions.change_password(&current, &new, &confirm)?;
            println!("Password changed successfully");
        }
    }
    Ok(())
}
