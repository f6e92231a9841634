pub mod health;
pub use self::health::health;

pub mod register;
pub use self::register::register;

pub mod login;
pub use self::login::login;

#[cfg(test)]
mod tests;

// common types and functions for the handlers
use crate::account::AccountInfo;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for both auth endpoints: `{success, user}` on success,
/// `{success, message}` on failure. Neither shape ever carries a password or
/// its hash.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    #[must_use]
    pub fn user(user: AccountInfo) -> Self {
        Self {
            success: true,
            user: Some(user),
            message: None,
        }
    }

    #[must_use]
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            user: None,
            message: Some(message.to_string()),
        }
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}
