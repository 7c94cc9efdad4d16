//! In-process booking store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookingError, BookingStore};
use crate::models::booking::{Booking, MeetingRoom, NewBooking, NewRoom, TimeWindow};

#[derive(Debug, Default)]
struct MemoryState {
    rooms: BTreeMap<i64, MeetingRoom>,
    bookings: Vec<Booking>,
    next_room_id: i64,
}

impl MemoryState {
    fn has_conflict(&self, room_id: i64, window: &TimeWindow) -> bool {
        self.bookings
            .iter()
            .any(|b| b.room_id == room_id && b.window().overlaps(window))
    }
}

/// Booking store held in memory behind a single lock.
///
/// `insert_if_available` holds the write lock across check and insert.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    state: RwLock<MemoryState>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn ping(&self) -> Result<(), BookingError> {
        Ok(())
    }

    async fn create_room(&self, room: NewRoom) -> Result<MeetingRoom, BookingError> {
        let mut state = self.state.write().await;
        state.next_room_id += 1;
        let room = MeetingRoom {
            id: state.next_room_id,
            name: room.name,
            capacity: room.capacity,
        };
        state.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, BookingError> {
        Ok(self.state.read().await.rooms.values().cloned().collect())
    }

    async fn find_room(&self, room_id: i64) -> Result<Option<MeetingRoom>, BookingError> {
        Ok(self.state.read().await.rooms.get(&room_id).cloned())
    }

    async fn is_available(&self, room_id: i64, window: TimeWindow) -> Result<bool, BookingError> {
        Ok(!self.state.read().await.has_conflict(room_id, &window))
    }

    async fn insert_if_available(&self, booking: NewBooking) -> Result<Booking, BookingError> {
        let mut state = self.state.write().await;
        if !state.rooms.contains_key(&booking.room_id) {
            return Err(BookingError::RoomNotFound(booking.room_id));
        }
        if state.has_conflict(booking.room_id, &booking.window) {
            return Err(BookingError::Conflict);
        }
        let stored = booking.into_booking();
        state.bookings.push(stored.clone());
        Ok(stored)
    }

    async fn list_bookings(&self, room_id: i64) -> Result<Vec<Booking>, BookingError> {
        let state = self.state.read().await;
        let mut bookings: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| b.room_id == room_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start_time);
        Ok(bookings)
    }

    async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>, BookingError> {
        let state = self.state.read().await;
        Ok(state.bookings.iter().find(|b| b.id == booking_id).cloned())
    }
}
