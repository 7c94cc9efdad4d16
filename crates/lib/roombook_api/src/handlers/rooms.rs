//! Meeting room request handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CreateRoomRequest, RoomResponse};
use crate::services::booking;

/// `POST /meeting_rooms` — create a room.
pub async fn create_room_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> AppResult<Json<RoomResponse>> {
    let Json(body) = body.map_err(|_| AppError::Validation("Invalid request body".into()))?;
    let resp = booking::create_room(state.store.as_ref(), &body.name, body.capacity).await?;
    Ok(Json(resp))
}

/// `GET /meeting_rooms` — list rooms.
pub async fn list_rooms_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    let resp = booking::list_rooms(state.store.as_ref()).await?;
    Ok(Json(resp))
}
