use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "silentpad")]
#[command(about = "Quiet local notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding SilentPad data (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(short, long, default_value = "")]
        title: String,
        /// Note content (read from stdin when omitted)
        content: Vec<String>,
    },
    /// List notes, newest first
    List {
        /// Number of notes to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single note
    Show {
        /// Note ID
        id: String,
    },
    /// Change a note's title or content
    Edit {
        /// Note ID
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
    /// Search note titles and content
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Erase every stored note, including unreadable data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Manage the local account and session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Show or change app settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Show or change profile fields
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create a local account and log in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out; notes and accounts are kept
    Logout,
    /// Show the logged-in account
    Status,
    /// Change the logged-in account's password
    Passwd {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current settings
    Show,
    /// Update one or more settings
    Set {
        #[arg(long)]
        dark_mode: Option<bool>,
        #[arg(long)]
        notifications: Option<bool>,
        #[arg(long)]
        auto_save: Option<bool>,
        /// Font size (12-24)
        #[arg(long)]
        font_size: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print profile fields
    Show,
    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}
