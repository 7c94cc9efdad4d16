//! Credential verification seam.
//!
//! The login flow only depends on [`CredentialVerifier`]; swapping the
//! single configured account for a user table does not touch it.

use async_trait::async_trait;

use super::AuthError;
use super::password::PasswordHash;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password";

/// Checks a username/password pair against a trust source.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns `Ok(true)` when the pair is valid.
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError>;
}

/// A single account whose password is held as a bcrypt hash.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    username: String,
    password_hash: PasswordHash,
}

/// Booking records store the username as `created_by`, which must not be blank.
fn account_name(username: impl Into<String>) -> Result<String, AuthError> {
    let username = username.into();
    if username.trim().is_empty() {
        return Err(AuthError::Config("account username must not be empty".into()));
    }
    Ok(username)
}

impl StaticCredentials {
    /// Build from a plaintext password (hashed immediately).
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self, AuthError> {
        Ok(Self {
            username: account_name(username)?,
            password_hash: PasswordHash::from_plaintext(password)?,
        })
    }

    /// Build from an existing bcrypt hash.
    pub fn from_hash(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            username: account_name(username)?,
            password_hash: PasswordHash::parse(password_hash)?,
        })
    }

    /// Read the account from the environment.
    ///
    /// | Variable              | Default    |
    /// |-----------------------|------------|
    /// | `ADMIN_USERNAME`      | `admin`    |
    /// | `ADMIN_PASSWORD_HASH` | —          |
    /// | `ADMIN_PASSWORD`      | `password` |
    ///
    /// `ADMIN_PASSWORD_HASH` wins over `ADMIN_PASSWORD` when both are set.
    /// A set but blank `ADMIN_USERNAME` is an error.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_settings(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD_HASH").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )
    }

    fn from_settings(
        username: Option<String>,
        password_hash: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AuthError> {
        let username = username.unwrap_or_else(|| DEFAULT_USERNAME.into());
        if let Some(hash) = password_hash
            && !hash.is_empty()
        {
            return Self::from_hash(username, hash);
        }
        let password = password.unwrap_or_else(|| DEFAULT_PASSWORD.into());
        Self::new(username, &password)
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        if username != self.username {
            return Ok(false);
        }
        self.password_hash.matches(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_configured_account() {
        let creds = StaticCredentials::new("admin", "password").unwrap();
        assert!(creds.verify("admin", "password").await.unwrap());
    }

    #[tokio::test]
    async fn rejects_wrong_password_or_user() {
        let creds = StaticCredentials::new("admin", "password").unwrap();
        assert!(!creds.verify("admin", "wrong").await.unwrap());
        assert!(!creds.verify("root", "password").await.unwrap());
        assert!(!creds.verify("", "").await.unwrap());
    }

    #[tokio::test]
    async fn from_hash_uses_given_hash() {
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        let creds = StaticCredentials::from_hash("ops", hash).unwrap();
        assert_eq!(creds.username(), "ops");
        assert!(creds.verify("ops", "s3cret").await.unwrap());
    }

    #[test]
    fn debug_hides_hash() {
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        let creds = StaticCredentials::from_hash("ops", hash).unwrap();
        assert!(!format!("{creds:?}").contains("$2b$"));
    }

    #[tokio::test]
    async fn settings_default_to_admin_password() {
        let creds = StaticCredentials::from_settings(None, None, None).unwrap();
        assert_eq!(creds.username(), "admin");
        assert!(creds.verify("admin", "password").await.unwrap());
    }

    #[tokio::test]
    async fn hash_setting_wins_over_plaintext() {
        let hash = bcrypt::hash("from-hash", 4).unwrap();
        let creds = StaticCredentials::from_settings(
            Some("ops".into()),
            Some(hash),
            Some("from-plaintext".into()),
        )
        .unwrap();
        assert!(creds.verify("ops", "from-hash").await.unwrap());
        assert!(!creds.verify("ops", "from-plaintext").await.unwrap());
    }

    #[test]
    fn blank_username_is_rejected() {
        for name in ["", "   "] {
            let err = StaticCredentials::from_settings(Some(name.into()), None, None).unwrap_err();
            assert!(matches!(err, AuthError::Config(_)), "got {err:?}");
        }
        let err = StaticCredentials::new("", "password").unwrap_err();
        assert!(matches!(err, AuthError::Config(_)), "got {err:?}");
    }

    #[test]
    fn unusable_hash_setting_is_rejected() {
        let err = StaticCredentials::from_settings(None, Some("plain-text".into()), None)
            .unwrap_err();
        assert!(matches!(err, AuthError::Config(_)), "got {err:?}");
    }
}
