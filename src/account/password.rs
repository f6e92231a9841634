use crate::account::error::AccountError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};

/// Argon2id hasher with the library defaults (19 MiB memory, 2 iterations,
/// 1 lane) and a fresh salt per hash. Hashes are stored as PHC strings.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password for storage.
    /// # Errors
    /// Returns [`AccountError::Storage`] if hashing fails.
    pub fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Storage(format!("password hashing failed: {e}")))?;

        Ok(password_hash.to_string())
    }

    /// Verify a password against a stored PHC hash. A mismatch is `Ok(false)`;
    /// only a malformed hash is an error.
    /// # Errors
    /// Returns [`AccountError::Storage`] if the stored hash cannot be parsed.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AccountError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AccountError::Storage(format!("invalid password hash: {e}")))?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AccountError::Storage(format!(
                "password verification failed: {e}"
            ))),
        }
    }
}
