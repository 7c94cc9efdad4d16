//! Route paths.

pub const GET_HEALTH: &str = "/health";
pub const POST_LOGIN: &str = "/login";
/// `GET` lists rooms, `POST` creates one.
pub const MEETING_ROOMS: &str = "/meeting_rooms";
/// `GET` lists a room's bookings, `POST` books it.
pub const MEETING_ROOM_BOOKINGS: &str = "/meeting_rooms/{id}/bookings";
pub const GET_BOOKING: &str = "/bookings/{id}";
