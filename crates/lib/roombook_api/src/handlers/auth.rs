//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, TokenResponse};
use crate::services::auth;

/// `POST /login` — authenticate with username + password.
pub async fn login_handler(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(body) = body.map_err(|_| AppError::Validation("Invalid request body".into()))?;
    let resp = auth::login(
        state.credentials.as_ref(),
        &body.username,
        &body.password,
        &state.config.jwt_secret,
    )
    .await?;
    Ok(Json(resp))
}
