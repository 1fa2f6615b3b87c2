//! Credential table and session slot in one key-value namespace
//!
//! Credentials live under `user_<email>`, the active session under
//! `logged_in_email`. Everything is local: no network, no expiry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{
    validate_email, validate_new_password, AuthError, AuthResult, CredentialHasher,
    PasswordCheck, Session,
};
use crate::kv::KeyValueStore;

const SESSION_KEY: &str = "logged_in_email";
const CREDENTIAL_PREFIX: &str = "user_";

fn credential_key(email: &str) -> String {
    format!("{CREDENTIAL_PREFIX}{email}")
}

/// Account creation, login, logout and password changes
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    kv: S,
    hasher: CredentialHasher,
    lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_hasher(kv, CredentialHasher::default())
    }

    pub fn with_hasher(kv: S, hasher: CredentialHasher) -> Self {
        Self {
            kv,
            hasher,
            lock: Arc::default(),
        }
    }

    /// Create an account and log it in
    pub fn register(&self, email: &str, password: &str) -> AuthResult<()> {
        validate_email(email)?;
        validate_new_password(password)?;

        let _guard = self.guard();
        let key = credential_key(email);
        if self.kv.contains(&key)? {
            return Err(AuthError::AccountExists);
        }

        let hash = self.hasher.hash(password)?;
        self.kv
            .set_many(&[(key.as_str(), hash.as_str()), (SESSION_KEY, email)])?;

        tracing::info!("Registered account {}", email);
        Ok(())
    }

    /// Check credentials and make `email` the active session
    pub fn login(&self, email: &str, password: &str) -> AuthResult<()> {
        validate_email(email)?;
        if password.trim().is_empty() {
            return Err(AuthError::MissingPassword);
        }

        let _guard = self.guard();
        let key = credential_key(email);
        let stored = self.kv.get(&key)?.ok_or(AuthError::NotFound)?;

        match self.hasher.verify(password, &stored)? {
            PasswordCheck::Mismatch => return Err(AuthError::WrongPassword),
            PasswordCheck::LegacyMatch => {
                let hash = self.hasher.hash(password)?;
                self.kv
                    .set_many(&[(key.as_str(), hash.as_str()), (SESSION_KEY, email)])?;
                tracing::warn!("Upgraded plaintext credential for {}", email);
            }
            PasswordCheck::Match => self.kv.set(SESSION_KEY, email)?,
        }

        tracing::info!("Logged in as {}", email);
        Ok(())
    }

    /// Clear the active session; credentials and notes are untouched
    pub fn logout(&self) -> AuthResult<()> {
        let _guard = self.guard();
        self.kv.remove(SESSION_KEY)?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Replace the active account's password after checking the current one
    pub fn change_password(&self, current: &str, new: &str, confirm: &str) -> AuthResult<()> {
        if [current, new, confirm]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AuthError::MissingFields);
        }
        if new != confirm {
            return Err(AuthError::Mismatch);
        }
        validate_new_password(new)?;

        let _guard = self.guard();
        let email = self.kv.get(SESSION_KEY)?.ok_or(AuthError::NotLoggedIn)?;
        let key = credential_key(&email);
        let stored = self.kv.get(&key)?.ok_or(AuthError::NotFound)?;

        if !self.hasher.verify(current, &stored)?.is_match() {
            return Err(AuthError::WrongPassword);
        }

        let hash = self.hasher.hash(new)?;
        self.kv.set(&key, &hash)?;

        tracing::info!("Changed password for {}", email);
        Ok(())
    }

    pub fn current_session(&self) -> AuthResult<Session> {
        Ok(self
            .kv
            .get(SESSION_KEY)?
            .map_or(Session::LoggedOut, Session::LoggedIn))
    }

    pub fn current_email(&self) -> AuthResult<Option<String>> {
        Ok(self.kv.get(SESSION_KEY)?)
    }

    pub fn is_logged_in(&self) -> AuthResult<bool> {
        Ok(self.kv.contains(SESSION_KEY)?)
    }

    /// Whether a credential record exists for `email`
    pub fn has_account(&self, email: &str) -> AuthResult<bool> {
        Ok(self.kv.contains(&credential_key(email))?)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
