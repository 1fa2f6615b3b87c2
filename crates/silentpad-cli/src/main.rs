//! SilentPad CLI - Quiet local notes from the command line
//!
//! Notes, the local account and app settings all live in the SilentPad data
//! directory (see `--data-dir` and `SILENTPAD_DATA_DIR`).

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};
use silentpad_core::config::StorageConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::auth_cmd::run_auth;
use crate::commands::common::open_services;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::profile::run_profile;
use crate::commands::reset::run_reset;
use crate::commands::search::run_search;
use crate::commands::settings::run_settings;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        if let Some(hint) = error.hint() {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = StorageConfig::resolve(cli.data_dir);
    tracing::debug!("Resolved data directory {}", config.data_dir().display());
    let app = open_services(config.data_dir())?;

    match command {
        Commands::Add { title, content } => run_add(&app, &title, &content)?,
        Commands::List { limit, json } => run_list(&app, limit, json)?,
        Commands::Show { id } => run_show(&app, &id)?,
        Commands::Edit { id, title, content } => {
            run_edit(&app, &id, title.as_deref(), content.as_deref())?;
        }
        Commands::Delete { id } => run_delete(&app, &id)?,
        Commands::Search { query, json } => run_search(&app, &query, json)?,
        Commands::Reset { yes } => run_reset(&app, yes)?,
        Commands::Auth { command } => run_auth(&app, command)?,
        Commands::Settings { command } => run_settings(&app, command)?,
        Commands::Profile { command } => run_profile(&app, command)?,
    }

    Ok(())
}
