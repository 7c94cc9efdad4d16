//! Meeting rooms, bookings and the storage contract behind them.
//!
//! [`BookingStore`] is the seam to persistence. [`PgBookingStore`] backs the
//! server; [`MemoryBookingStore`] backs tests and local experiments.

pub mod admission;
pub mod memory;
pub mod postgres;
pub mod rooms;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::booking::{Booking, MeetingRoom, NewBooking, NewRoom, TimeWindow};

pub use memory::MemoryBookingStore;
pub use postgres::PgBookingStore;

/// Booking domain errors.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("meeting room not found")]
    RoomNotFound(i64),

    #[error("booking not found")]
    BookingNotFound(String),

    #[error("room not available")]
    Conflict,

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}

/// Persistence for rooms and bookings.
///
/// Implementations must make [`BookingStore::insert_if_available`] atomic:
/// two concurrent calls for overlapping windows on the same room may not
/// both succeed.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), BookingError>;

    /// Insert a room, returning it with its assigned id.
    async fn create_room(&self, room: NewRoom) -> Result<MeetingRoom, BookingError>;

    /// All rooms, ordered by id.
    async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, BookingError>;

    async fn find_room(&self, room_id: i64) -> Result<Option<MeetingRoom>, BookingError>;

    /// Whether no existing booking of `room_id` overlaps `window`.
    async fn is_available(&self, room_id: i64, window: TimeWindow) -> Result<bool, BookingError>;

    /// Check availability and insert in one atomic step.
    ///
    /// Fails with [`BookingError::Conflict`] when an overlapping booking
    /// exists and [`BookingError::RoomNotFound`] when the room is missing.
    async fn insert_if_available(&self, booking: NewBooking) -> Result<Booking, BookingError>;

    /// Bookings of one room, ordered by start time.
    async fn list_bookings(&self, room_id: i64) -> Result<Vec<Booking>, BookingError>;

    async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>, BookingError>;
}
