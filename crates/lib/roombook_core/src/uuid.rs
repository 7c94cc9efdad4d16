// Booking ids are UUIDv7 generated app-side so they sort by creation time.
// Room ids stay numeric (BIGSERIAL).

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}

/// Generate a new booking id in its text form.
pub fn new_booking_id() -> String {
    uuidv7().to_string()
}
