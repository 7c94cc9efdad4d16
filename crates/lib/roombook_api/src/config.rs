//! API server configuration.

use roombook_core::auth::jwt::SigningSecret;

/// Configuration for the API server.
///
/// The server binary fills this from its command line; the database pool is
/// built there and handed to [`crate::AppState`] directly.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// Secret used both to sign and to verify session tokens.
    pub jwt_secret: SigningSecret,
}
