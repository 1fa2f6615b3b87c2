//! Password hashing and verification (Argon2id)
//!
//! New credentials are stored as PHC strings (`$argon2id$v=19$...`) with a
//! random salt. Records written before hashing was introduced hold the
//! plaintext password; those still verify by exact comparison and are
//! reported as [`PasswordCheck::LegacyMatch`] so the caller can upgrade them.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use super::{AuthError, AuthResult};

const PHC_PREFIX: &str = "$argon2";

/// Outcome of checking a password against a stored credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Match,
    /// Matched a plaintext record that should be re-hashed
    LegacyMatch,
    Mismatch,
}

impl PasswordCheck {
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match | Self::LegacyMatch)
    }
}

/// Argon2id hasher with configurable cost
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}

impl CredentialHasher {
    /// Hasher with explicit memory (KiB), iteration and lane counts
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> AuthResult<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|error| AuthError::PasswordHash(error.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh salt. Returns a PHC-format string.
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|error| AuthError::PasswordHash(error.to_string()))?;
        Ok(hash.to_string())
    }

    /// Check a password against a stored PHC string or legacy plaintext record
    ///
    /// A record that does not parse as a PHC string is compared as plaintext,
    /// so an old password that happens to start with `$argon2` still works.
    pub fn verify(&self, password: &str, stored: &str) -> AuthResult<PasswordCheck> {
        let parsed = if stored.starts_with(PHC_PREFIX) {
            PasswordHash::new(stored)
                .inspect_err(|error| {
                    tracing::debug!("Stored credential is not a PHC string: {}", error);
                })
                .ok()
        } else {
            None
        };

        let Some(parsed) = parsed else {
            return Ok(if stored == password {
                PasswordCheck::LegacyMatch
            } else {
                PasswordCheck::Mismatch
            });
        };

        Ok(
            if self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
            {
                PasswordCheck::Match
            } else {
                PasswordCheck::Mismatch
            },
        )
    }
}
