use thiserror::Error;

/// Failures at the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email uniqueness constraint fired on insert.
    #[error("email already registered")]
    Duplicate,

    /// Connectivity or query failure.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Outcomes of the account service. Storage failures never escape
/// unclassified: anything the store reports that is not a duplicate key
/// collapses into [`AccountError::Storage`].
#[derive(Debug, Error)]
pub enum AccountError {
    /// The email is already registered, either found up front or lost to a
    /// concurrent registration at insert time.
    #[error("email already registered")]
    Duplicate,

    /// Unknown email or wrong password. One variant for both causes so the
    /// response cannot reveal whether the account exists.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Persistence failure, including a stored hash that no longer parses.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<StoreError> for AccountError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::Duplicate,
            StoreError::Unavailable(message) => Self::Storage(message),
        }
    }
}
