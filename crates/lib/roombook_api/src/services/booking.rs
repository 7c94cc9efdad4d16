//! Room and booking service — thin layer over `roombook_core::booking`.

use roombook_core::booking::admission::admit_booking;
use roombook_core::booking::rooms::{create_room as create_room_in, require_room};
use roombook_core::booking::{BookingError, BookingStore};
use roombook_core::models::auth::SessionClaims;

use crate::error::{AppError, AppResult};
use crate::models::{BookingForm, BookingResponse, RoomResponse};

/// Parse the `{id}` path segment of a room route.
pub fn parse_room_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation("invalid room id".into()))
}

/// Run booking admission for the authenticated requester.
pub async fn create_booking(
    store: &dyn BookingStore,
    room_id: &str,
    form: &BookingForm,
    requester: &SessionClaims,
) -> AppResult<BookingResponse> {
    let room_id = parse_room_id(room_id)?;
    let booking = admit_booking(
        store,
        room_id,
        form.start.as_deref(),
        form.end.as_deref(),
        requester,
    )
    .await?;
    Ok(booking.into())
}

/// Bookings of one room, ordered by start time.
pub async fn list_bookings(
    store: &dyn BookingStore,
    room_id: &str,
) -> AppResult<Vec<BookingResponse>> {
    let room_id = parse_room_id(room_id)?;
    require_room(store, room_id).await?;
    let bookings = store.list_bookings(room_id).await?;
    Ok(bookings.into_iter().map(BookingResponse::from).collect())
}

pub async fn get_booking(store: &dyn BookingStore, booking_id: &str) -> AppResult<BookingResponse> {
    let booking = store
        .get_booking(booking_id)
        .await?
        .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;
    Ok(booking.into())
}

pub async fn create_room(
    store: &dyn BookingStore,
    name: &str,
    capacity: i32,
) -> AppResult<RoomResponse> {
    let room = create_room_in(store, name, capacity).await?;
    Ok(room.into())
}

pub async fn list_rooms(store: &dyn BookingStore) -> AppResult<Vec<RoomResponse>> {
    let rooms = store.list_rooms().await?;
    Ok(rooms.into_iter().map(RoomResponse::from).collect())
}
