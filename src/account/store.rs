use crate::account::{error::StoreError, Account, NewAccount};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

/// Durable keyed storage for accounts. The seam that keeps the service
/// testable without a running database.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact-match lookup by email. Absence is `Ok(None)`, never an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Persist an account and return it with the store-assigned id.
    /// `StoreError::Duplicate` when the email uniqueness constraint fires.
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;
}

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS accounts (
    id            BIGSERIAL PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    account_type  TEXT NOT NULL,
    name          TEXT NOT NULL
)";

const SELECT_COLUMNS: &str = "id, email, password_hash, account_type, name";

/// `PostgreSQL` credential store. Uniqueness of `email` is enforced by the
/// table constraint, not by the application; a lost check-then-insert race
/// surfaces here as [`StoreError::Duplicate`].
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the accounts table if it does not exist. Called once at
    /// startup; a failure here is fatal to the process.
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the statement fails.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    #[instrument(skip_all)]
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    #[instrument(skip_all)]
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO accounts (email, password_hash, account_type, name) \
             VALUES ($1, $2, $3, $4) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.account_type)
        .bind(&account.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                StoreError::Duplicate
            } else {
                StoreError::Unavailable(e.to_string())
            }
        })
    }
}
