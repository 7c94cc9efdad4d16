//! Meeting room directory operations.

use tracing::info;

use super::{BookingError, BookingStore};
use crate::models::booking::{MeetingRoom, NewRoom};

/// Validate and create a meeting room.
pub async fn create_room(
    store: &dyn BookingStore,
    name: &str,
    capacity: i32,
) -> Result<MeetingRoom, BookingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BookingError::Validation("room name must not be empty".into()));
    }
    if capacity <= 0 {
        return Err(BookingError::Validation("capacity must be positive".into()));
    }

    let room = store
        .create_room(NewRoom {
            name: name.to_string(),
            capacity,
        })
        .await?;
    info!(room_id = room.id, name = %room.name, capacity, "meeting room created");
    Ok(room)
}

/// Look up a room, failing with `RoomNotFound` when absent.
pub async fn require_room(
    store: &dyn BookingStore,
    room_id: i64,
) -> Result<MeetingRoom, BookingError> {
    store
        .find_room(room_id)
        .await?
        .ok_or(BookingError::RoomNotFound(room_id))
}
