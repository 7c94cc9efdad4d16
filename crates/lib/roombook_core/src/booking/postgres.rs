//! PostgreSQL-backed booking store.

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use super::{BookingError, BookingStore};
use crate::models::booking::{Booking, MeetingRoom, NewBooking, NewRoom, TimeWindow};

/// `exclusion_violation`: the `bookings_no_overlap` constraint fired.
const EXCLUSION_VIOLATION: &str = "23P01";
/// `foreign_key_violation`: the referenced room does not exist.
const FOREIGN_KEY_VIOLATION: &str = "23503";

const BOOKING_COLUMNS: &str = "id, start_time, end_time, room_id, created_by";

/// Booking store over a PostgreSQL pool.
#[derive(Clone, Debug)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Count bookings of `room_id` that overlap `window` (closed endpoints).
async fn count_conflicts<'e>(
    executor: impl PgExecutor<'e>,
    room_id: i64,
    window: &TimeWindow,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM bookings \
         WHERE room_id = $1 AND start_time <= $3 AND end_time >= $2",
    )
    .bind(room_id)
    .bind(window.start)
    .bind(window.end)
    .fetch_one(executor)
    .await
}

/// Translate constraint violations on the write path; anything else is a database failure.
fn map_write_error(e: sqlx::Error, room_id: i64) -> BookingError {
    if let sqlx::Error::Database(db) = &e {
        match db.code().as_deref() {
            Some(EXCLUSION_VIOLATION) => {
                debug!(room_id, "overlap rejected by exclusion constraint");
                return BookingError::Conflict;
            }
            Some(FOREIGN_KEY_VIOLATION) => return BookingError::RoomNotFound(room_id),
            _ => {}
        }
    }
    BookingError::DbError(e)
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn ping(&self) -> Result<(), BookingError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_room(&self, room: NewRoom) -> Result<MeetingRoom, BookingError> {
        let room = sqlx::query_as::<_, MeetingRoom>(
            "INSERT INTO meeting_rooms (name, capacity) VALUES ($1, $2) \
             RETURNING id, name, capacity",
        )
        .bind(&room.name)
        .bind(room.capacity)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, BookingError> {
        let rooms = sqlx::query_as::<_, MeetingRoom>(
            "SELECT id, name, capacity FROM meeting_rooms ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    async fn find_room(&self, room_id: i64) -> Result<Option<MeetingRoom>, BookingError> {
        let room = sqlx::query_as::<_, MeetingRoom>(
            "SELECT id, name, capacity FROM meeting_rooms WHERE id = $1",
        )
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(room)
    }

    async fn is_available(&self, room_id: i64, window: TimeWindow) -> Result<bool, BookingError> {
        let conflicts = count_conflicts(&self.pool, room_id, &window).await?;
        Ok(conflicts == 0)
    }

    // The `bookings_no_overlap` exclusion constraint decides conflicts: a
    // concurrent insert of an overlapping window waits for the other
    // transaction and then fails with 23P01. Disjoint windows never block.
    async fn insert_if_available(&self, booking: NewBooking) -> Result<Booking, BookingError> {
        let room_id = booking.room_id;
        let stored = sqlx::query_as::<_, Booking>(&format!(
            "INSERT INTO bookings ({BOOKING_COLUMNS}) VALUES ($1, $2, $3, $4, $5) \
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(&booking.id)
        .bind(booking.window.start)
        .bind(booking.window.end)
        .bind(room_id)
        .bind(&booking.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, room_id))?;
        Ok(stored)
    }

    async fn list_bookings(&self, room_id: i64) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE room_id = $1 ORDER BY start_time"
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>, BookingError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(booking)
    }
}
