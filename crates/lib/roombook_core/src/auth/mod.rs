//! Authentication and authorization logic.
//!
//! Session token issuance and verification, password hashing, and the
//! credential verification seam used by the login flow.

pub mod credentials;
pub mod jwt;
pub mod password;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The configured account cannot be used (blank name, unusable hash).
    #[error("Invalid account configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Reasons a bearer token is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing authorization header")]
    Missing,

    #[error("Invalid authorization scheme")]
    InvalidScheme,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token: {0}")]
    Invalid(String),
}
