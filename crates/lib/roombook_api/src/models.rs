//! Request and response bodies.
//!
//! Responses use camelCase field names; the domain models in
//! `roombook_core::models` stay snake_case.

use chrono::{DateTime, Utc};
use roombook_core::models::booking::{Booking, MeetingRoom};
use serde::{Deserialize, Serialize};

/// Error payload returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Form fields of `POST /meeting_rooms/{id}/bookings`.
///
/// Both are optional here so a missing field reports the same error as an
/// unparseable one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub room_id: i64,
    pub created_by: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            start: b.start_time,
            end: b.end_time,
            room_id: b.room_id,
            created_by: b.created_by,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
}

impl From<MeetingRoom> for RoomResponse {
    fn from(r: MeetingRoom) -> Self {
        Self {
            id: r.id,
            name: r.name,
            capacity: r.capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub db_connected: bool,
}
