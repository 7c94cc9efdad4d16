//! Authentication service — login flow over an injected credential verifier.

use roombook_core::auth::credentials::CredentialVerifier;
use roombook_core::auth::jwt::{SigningSecret, issue_session_token};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::TokenResponse;

/// Authenticate with username + password and issue a 24 h session token.
pub async fn login(
    credentials: &dyn CredentialVerifier,
    username: &str,
    password: &str,
    jwt_secret: &SigningSecret,
) -> AppResult<TokenResponse> {
    if !credentials.verify(username, password).await? {
        warn!(username, "login rejected");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let token = issue_session_token(username, jwt_secret)?;
    info!(username, "session token issued");
    Ok(TokenResponse { token })
}
