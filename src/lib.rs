//! # Workerhub accounts service
//!
//! A small HTTP service that owns account registration and login for the
//! workerhub job marketplace. Accounts live in a single `PostgreSQL` table
//! keyed by email; passwords are stored as Argon2id hashes and verified with
//! the library's constant-time comparison.
//!
//! The crate splits into three layers:
//!
//! - [`account`]: the core. A [`account::service::AccountService`] that
//!   registers and authenticates accounts against a
//!   [`account::store::CredentialStore`]. Transport-agnostic and testable
//!   without a running server.
//! - [`workerhub`]: the HTTP surface (axum router, handlers, health).
//! - [`cli`]: clap command parsing and telemetry bootstrap.

pub mod account;
pub mod cli;
pub mod workerhub;
