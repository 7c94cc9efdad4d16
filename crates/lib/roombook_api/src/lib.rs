//! # roombook_api
//!
//! HTTP API library for Roombook.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use roombook_core::auth::credentials::CredentialVerifier;
use roombook_core::booking::{BookingStore, PgBookingStore};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, bookings, health, rooms};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Room and booking persistence.
    pub store: Arc<dyn BookingStore>,
    /// Trust source for `POST /login`.
    pub credentials: Arc<dyn CredentialVerifier>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(
        pool: PgPool,
        credentials: Arc<dyn CredentialVerifier>,
        config: ApiConfig,
    ) -> Self {
        Self {
            store: Arc::new(PgBookingStore::new(pool)),
            credentials,
            config,
        }
    }
}

/// Run embedded database migrations.
///
/// Delegates to `roombook_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    roombook_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::GET_HEALTH, get(health::health_handler))
        .route(routes::POST_LOGIN, post(auth::login_handler));

    // Protected routes (require a bearer token)
    let protected = Router::new()
        .route(
            routes::MEETING_ROOMS,
            get(rooms::list_rooms_handler).post(rooms::create_room_handler),
        )
        .route(
            routes::MEETING_ROOM_BOOKINGS,
            get(bookings::list_bookings_handler).post(bookings::create_booking_handler),
        )
        .route(routes::GET_BOOKING, get(bookings::get_booking_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
