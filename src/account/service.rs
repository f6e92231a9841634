use crate::account::{
    error::AccountError,
    password::PasswordHasher,
    store::CredentialStore,
    AccountInfo, NewAccount,
};
use std::fmt;
use tracing::{debug, instrument};

// Well-formed Argon2id hash that matches no password. Verified on lookups
// that miss so an unknown email costs the same as a wrong password.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// A registration request as accepted by the service.
#[derive(Clone)]
pub struct NewRegistration {
    pub email: String,
    pub password: String,
    pub account_type: String,
    pub name: String,
}

impl fmt::Debug for NewRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRegistration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("name", &self.name)
            .finish()
    }
}

/// Registration and login over a [`CredentialStore`]. Stateless per call; the
/// store is the only shared resource. Built with an explicit store handle, no
/// ambient registry.
#[derive(Clone)]
pub struct AccountService<S> {
    store: S,
    hasher: PasswordHasher,
}

impl<S: CredentialStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
        }
    }

    /// Register a new account.
    ///
    /// The existence check is advisory; the store's uniqueness constraint is
    /// what actually closes the race, and a constraint hit at insert time is
    /// reported as [`AccountError::Duplicate`] like any other duplicate.
    ///
    /// # Errors
    /// [`AccountError::Duplicate`] when the email is taken,
    /// [`AccountError::Storage`] on any persistence failure.
    #[instrument(skip_all)]
    pub async fn register(
        &self,
        registration: NewRegistration,
    ) -> Result<AccountInfo, AccountError> {
        if self
            .store
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AccountError::Duplicate);
        }

        let password_hash = self.hasher.hash_password(&registration.password)?;

        let account = self
            .store
            .insert(NewAccount {
                email: registration.email,
                password_hash,
                account_type: registration.account_type,
                name: registration.name,
            })
            .await?;

        debug!("registered account {}", account.id);

        Ok(account.into())
    }

    /// Verify credentials and return the account projection.
    ///
    /// Unknown email and wrong password are the same
    /// [`AccountError::InvalidCredentials`]; the miss path still runs a
    /// verification against [`DUMMY_HASH`] so the two cost the same.
    ///
    /// # Errors
    /// [`AccountError::InvalidCredentials`] on a failed match,
    /// [`AccountError::Storage`] on any persistence failure.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<AccountInfo, AccountError> {
        let Some(account) = self.store.find_by_email(email).await? else {
            let _ = self.hasher.verify_password(password, DUMMY_HASH);
            return Err(AccountError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify_password(password, &account.password_hash)?
        {
            return Err(AccountError::InvalidCredentials);
        }

        debug!("login for account {}", account.id);

        Ok(account.into())
    }
}
