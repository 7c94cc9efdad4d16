//! Booking request handlers.

use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::AppState;
use crate::error::AppResult;
use crate::extract::BookingBody;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::BookingResponse;
use crate::services::booking;

/// `POST /meeting_rooms/{id}/bookings` — book a room for `start`..`end`
/// (urlencoded or multipart form).
pub async fn create_booking_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(room_id): Path<String>,
    BookingBody(form): BookingBody,
) -> AppResult<Json<BookingResponse>> {
    let resp = booking::create_booking(state.store.as_ref(), &room_id, &form, &user.0).await?;
    Ok(Json(resp))
}

/// `GET /meeting_rooms/{id}/bookings` — list a room's bookings.
pub async fn list_bookings_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let resp = booking::list_bookings(state.store.as_ref(), &room_id).await?;
    Ok(Json(resp))
}

/// `GET /bookings/{id}` — fetch one booking.
pub async fn get_booking_handler(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> AppResult<Json<BookingResponse>> {
    let resp = booking::get_booking(state.store.as_ref(), &booking_id).await?;
    Ok(Json(resp))
}
