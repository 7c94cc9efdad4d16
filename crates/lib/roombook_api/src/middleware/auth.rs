//! Authentication middleware — Bearer token extraction and JWT verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use roombook_core::auth::TokenError;
use roombook_core::auth::jwt::{SigningSecret, verify_session_token};
use roombook_core::models::auth::SessionClaims;

use crate::AppState;
use crate::error::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// Verified session, stored in request extensions for protected handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub SessionClaims);

/// Validate a raw `Authorization` header value.
///
/// Headers that are absent, not valid UTF-8, or shorter than the bearer
/// prefix are rejected without indexing into the value.
pub fn authenticate(
    header: Option<&str>,
    secret: &SigningSecret,
) -> Result<SessionClaims, TokenError> {
    let header = header.ok_or(TokenError::Missing)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(TokenError::InvalidScheme)?;
    verify_session_token(token.trim(), secret)
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = authenticate(header, &state.config.jwt_secret)?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roombook_core::auth::jwt::issue_session_token;

    fn secret() -> SigningSecret {
        SigningSecret::new("middleware-secret")
    }

    #[test]
    fn missing_header() {
        assert_eq!(authenticate(None, &secret()), Err(TokenError::Missing));
    }

    #[test]
    fn short_or_foreign_scheme() {
        for header in ["", "B", "Bearer", "Basic YWRtaW46cGFzc3dvcmQ=", "bearer abc"] {
            assert_eq!(
                authenticate(Some(header), &secret()),
                Err(TokenError::InvalidScheme),
                "header {header:?}"
            );
        }
    }

    #[test]
    fn empty_bearer_token_is_invalid() {
        let err = authenticate(Some("Bearer "), &secret()).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn valid_token_yields_claims() {
        let token = issue_session_token("admin", &secret()).unwrap();
        let header = format!("Bearer {token}");
        let claims = authenticate(Some(&header), &secret()).unwrap();
        assert_eq!(claims.username, "admin");
    }
}
