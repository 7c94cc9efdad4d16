//! Session token generation and verification.

use std::fmt;
use std::path::PathBuf;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::{info, warn};

use super::{AuthError, TokenError};
use crate::models::auth::SessionClaims;

/// Session token lifetime: 24 hours.
pub const SESSION_TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

/// The only algorithm tokens are signed and accepted with.
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// HMAC secret shared by token issuance and verification.
#[derive(Clone)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Resolve the secret: env var `JWT_SECRET` → persisted file → generated.
    ///
    /// A generated secret is written to the platform data directory so tokens
    /// survive restarts.
    pub fn resolve() -> Self {
        if let Ok(secret) = std::env::var("JWT_SECRET")
            && !secret.is_empty()
        {
            return Self(secret);
        }
        let secret_path = secret_path();
        if let Ok(existing) = std::fs::read_to_string(&secret_path) {
            let trimmed = existing.trim();
            if !trimmed.is_empty() {
                return Self(trimmed.to_string());
            }
        }
        let secret: String = rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect();
        if let Some(parent) = secret_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match std::fs::write(&secret_path, &secret) {
            Ok(()) => info!(path = %secret_path.display(), "generated new JWT secret"),
            Err(e) => warn!(path = %secret_path.display(), "could not persist JWT secret: {e}"),
        }
        Self(secret)
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.0.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.0.as_bytes())
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Path to the persisted JWT secret file.
fn secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roombook")
        .join("jwt-secret")
}

/// Generate a signed session token (HS256, 24 h expiry) for `username`.
pub fn issue_session_token(username: &str, secret: &SigningSecret) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = SessionClaims {
        username: username.to_string(),
        exp: (now + Duration::seconds(SESSION_TOKEN_EXPIRY_SECS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(&Header::new(SIGNING_ALGORITHM), &claims, &secret.encoding_key())
        .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
}

/// Verify a session token, returning the claims on success.
///
/// Tokens signed with any algorithm other than HS256 are rejected.
pub fn verify_session_token(
    token: &str,
    secret: &SigningSecret,
) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.validate_exp = true;
    decode::<SessionClaims>(token, &secret.decoding_key(), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Invalid(e.to_string()),
        })
}
