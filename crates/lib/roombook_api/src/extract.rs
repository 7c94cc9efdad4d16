//! Request body extractors.

use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;

use crate::error::{AppError, AppResult};
use crate::models::BookingForm;

/// `start`/`end` read from a `application/x-www-form-urlencoded` or
/// `multipart/form-data` body.
///
/// A missing body, or one of any other type, yields an empty form so the
/// caller answers "invalid start time" rather than a media-type error.
#[derive(Debug, Clone, Default)]
pub struct BookingBody(pub BookingForm);

impl<S> FromRequest<S> for BookingBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return read_multipart(multipart).await.map(Self);
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<BookingForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return Ok(Self(form));
        }
        Ok(Self::default())
    }
}

/// Collect the `start` and `end` text parts; other parts are skipped.
async fn read_multipart(mut multipart: Multipart) -> AppResult<BookingForm> {
    let mut form = BookingForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let slot = match field.name() {
            Some("start") => &mut form.start,
            Some("end") => &mut form.end,
            _ => continue,
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        *slot = Some(value);
    }
    Ok(form)
}
