//! silentpad-core - Core library for SilentPad
//!
//! This crate contains the note store, the local account/session store and
//! the settings and profile stores, all persisted through a flat key-value
//! layer. Clients (currently the CLI) call into it directly.

pub mod auth;
pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod services;
pub mod store;
pub mod util;

pub use auth::{AuthError, AuthResult, Session};
pub use error::{Error, ErrorKind, Result};
pub use models::{AppSettings, Note, NoteId, Profile};
pub use services::AppServices;
