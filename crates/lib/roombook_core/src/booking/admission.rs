//! Booking admission: validate a request, check availability, persist.
//!
//! Steps run in a fixed order so callers see the first failing check:
//! start time, end time, window shape, room existence, availability.
//! The final insert repeats the availability check atomically in the store,
//! so a request that loses a race still ends in `Conflict`.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::rooms::require_room;
use super::{BookingError, BookingStore};
use crate::models::auth::SessionClaims;
use crate::models::booking::{Booking, NewBooking, TimeWindow};
use crate::uuid::new_booking_id;

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Parse the raw `start`/`end` form values into a well-formed window.
pub fn parse_window(start: Option<&str>, end: Option<&str>) -> Result<TimeWindow, BookingError> {
    let start = start
        .and_then(parse_timestamp)
        .ok_or_else(|| BookingError::Validation("invalid start time".into()))?;
    let end = end
        .and_then(parse_timestamp)
        .ok_or_else(|| BookingError::Validation("invalid end time".into()))?;

    let window = TimeWindow::new(start, end);
    if !window.is_well_formed() {
        return Err(BookingError::Validation(
            "end time must be after start time".into(),
        ));
    }
    Ok(window)
}

/// Admit a booking of `room_id` for the authenticated requester.
pub async fn admit_booking(
    store: &dyn BookingStore,
    room_id: i64,
    start: Option<&str>,
    end: Option<&str>,
    requester: &SessionClaims,
) -> Result<Booking, BookingError> {
    let window = parse_window(start, end)?;
    require_room(store, room_id).await?;

    if !store.is_available(room_id, window).await? {
        debug!(room_id, start = %window.start, end = %window.end, "room not available");
        return Err(BookingError::Conflict);
    }

    let booking = store
        .insert_if_available(NewBooking {
            id: new_booking_id(),
            room_id,
            window,
            created_by: requester.username.clone(),
        })
        .await?;

    info!(
        booking_id = %booking.id,
        room_id,
        created_by = %booking.created_by,
        "booking created"
    );
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::MemoryBookingStore;
    use crate::booking::rooms::create_room;

    fn claims(username: &str) -> SessionClaims {
        SessionClaims {
            username: username.into(),
            exp: i64::MAX,
            iat: 0,
        }
    }

    async fn store_with_room() -> MemoryBookingStore {
        let store = MemoryBookingStore::new();
        create_room(&store, "Boardroom", 8).await.unwrap();
        store
    }

    fn validation_message(err: BookingError) -> String {
        match err {
            BookingError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_timestamp_normalises_offset() {
        let t = parse_timestamp("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-01T10:00:00+00:00");
        assert!(parse_timestamp("2024-01-01 10:00").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn parse_window_checks_start_before_end() {
        let err = parse_window(Some("nope"), Some("also nope")).unwrap_err();
        assert_eq!(validation_message(err), "invalid start time");

        let err = parse_window(Some("2024-01-01T10:00:00Z"), None).unwrap_err();
        assert_eq!(validation_message(err), "invalid end time");

        let err = parse_window(Some("2024-01-01T10:00:00Z"), Some("2024-01-01T09:00:00Z"))
            .unwrap_err();
        assert_eq!(validation_message(err), "end time must be after start time");
    }

    #[tokio::test]
    async fn creates_booking_with_requester() {
        let store = store_with_room().await;
        let booking = admit_booking(
            &store,
            1,
            Some("2024-01-01T10:00:00Z"),
            Some("2024-01-01T11:00:00Z"),
            &claims("alice"),
        )
        .await
        .unwrap();

        assert_eq!(booking.room_id, 1);
        assert_eq!(booking.created_by, "alice");
        assert_eq!(store.get_booking(&booking.id).await.unwrap(), Some(booking));
    }

    #[tokio::test]
    async fn back_to_back_booking_is_a_conflict() {
        let store = store_with_room().await;
        admit_booking(
            &store,
            1,
            Some("2024-01-01T10:00:00Z"),
            Some("2024-01-01T11:00:00Z"),
            &claims("alice"),
        )
        .await
        .unwrap();

        let err = admit_booking(
            &store,
            1,
            Some("2024-01-01T11:00:00Z"),
            Some("2024-01-01T12:00:00Z"),
            &claims("bob"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, BookingError::Conflict));
        assert_eq!(store.list_bookings(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let store = MemoryBookingStore::new();
        let err = admit_booking(
            &store,
            3,
            Some("2024-01-01T10:00:00Z"),
            Some("2024-01-01T11:00:00Z"),
            &claims("alice"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, BookingError::RoomNotFound(3)));
    }

    #[tokio::test]
    async fn time_errors_win_over_missing_room() {
        let store = MemoryBookingStore::new();
        let err = admit_booking(&store, 3, Some("bad"), None, &claims("alice"))
            .await
            .unwrap_err();
        assert_eq!(validation_message(err), "invalid start time");
    }
}
