//! # roombook_core
//!
//! Core domain logic for Roombook: session tokens, credential checks,
//! meeting rooms and the booking store.

pub mod auth;
pub mod booking;
pub mod migrate;
pub mod models;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
