//! Domain models shared by the core library and the API layer.

pub mod auth;
pub mod booking;
