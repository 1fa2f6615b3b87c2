//! Local accounts and the logged-in session.

mod password;
mod session_store;

pub use password::{CredentialHasher, PasswordCheck};
pub use session_store::SessionStore;

use thiserror::Error;

use crate::error::{Error, ErrorKind};

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// The currently active identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(String),
}

impl Session {
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(email) => Some(email),
        }
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

/// Account and session failures; `Display` is the message shown to the user
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Account with this email already exists")]
    AccountExists,
    #[error("No account found with this email")]
    NotFound,
    #[error("Incorrect password")]
    WrongPassword,
    #[error("New passwords don't match")]
    Mismatch,
    #[error("You are not logged in")]
    NotLoggedIn,
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Storage(#[from] Error),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail
            | Self::PasswordTooShort
            | Self::MissingPassword
            | Self::MissingFields
            | Self::WrongPassword
            | Self::Mismatch
            | Self::NotLoggedIn => ErrorKind::Validation,
            Self::NotFound => ErrorKind::NotFound,
            Self::AccountExists => ErrorKind::Conflict,
            Self::PasswordHash(_) => ErrorKind::Internal,
            Self::Storage(error) => error.kind(),
        }
    }
}

fn validate_email(email: &str) -> AuthResult<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}

fn validate_new_password(password: &str) -> AuthResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}
