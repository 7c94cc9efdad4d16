//! bcrypt-hashed account passwords.

use std::fmt;

use super::AuthError;

/// bcrypt cost factor for hashes produced at startup.
const BCRYPT_COST: u32 = 10;

/// A bcrypt hash of the account password. Never printed.
#[derive(Clone)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password.
    pub fn from_plaintext(password: &str) -> Result<Self, AuthError> {
        bcrypt::hash(password, BCRYPT_COST)
            .map(Self)
            .map_err(|e| AuthError::Internal(format!("hash account password: {e}")))
    }

    /// Accept a pre-computed hash (e.g. `ADMIN_PASSWORD_HASH`).
    ///
    /// The hash is checked once here so a typo fails at startup instead of
    /// turning every login into a server error.
    pub fn parse(hash: impl Into<String>) -> Result<Self, AuthError> {
        let hash = hash.into();
        bcrypt::verify("", &hash)
            .map_err(|e| AuthError::Config(format!("password hash is not bcrypt: {e}")))?;
        Ok(Self(hash))
    }

    /// Whether `password` matches this hash.
    pub fn matches(&self, password: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, &self.0)
            .map_err(|e| AuthError::Internal(format!("check account password: {e}")))
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_hash_matches_only_its_password() {
        let hash = PasswordHash::from_plaintext("correct horse").unwrap();
        assert!(hash.matches("correct horse").unwrap());
        assert!(!hash.matches("battery staple").unwrap());
    }

    #[test]
    fn parse_accepts_existing_bcrypt_hash() {
        let raw = bcrypt::hash("s3cret", 4).unwrap();
        let hash = PasswordHash::parse(raw).unwrap();
        assert!(hash.matches("s3cret").unwrap());
    }

    #[test]
    fn parse_rejects_non_bcrypt_text() {
        let err = PasswordHash::parse("not-a-bcrypt-hash").unwrap_err();
        assert!(matches!(err, AuthError::Config(_)), "got {err:?}");
    }

    #[test]
    fn debug_is_redacted() {
        let hash = PasswordHash::from_plaintext("pw").unwrap();
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }
}
