//! Account registration and credential verification.
//!
//! The only component with actual decisions: uniqueness on registration,
//! one-way hashing of passwords, constant-time verification on login.
//! Everything else in the crate is plumbing around it.

pub mod error;
pub mod password;
pub mod service;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A stored account row. The password hash never leaves this type; responses
/// carry [`AccountInfo`] instead.
#[derive(Clone, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub account_type: String,
    pub name: String,
}

// Manual Debug so the hash cannot end up in logs or spans.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("name", &self.name)
            .finish()
    }
}

/// Row to persist: everything but the store-assigned id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub account_type: String,
    pub name: String,
}

/// Public projection of an account, safe to return to any client.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl From<Account> for AccountInfo {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            account_type: account.account_type,
        }
    }
}
