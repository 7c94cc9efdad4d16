//! Booking schema migrations.
//!
//! The SQL under `roombook_core/migrations/` is embedded at build time. The
//! first migration enables `btree_gist` for the no-overlap exclusion
//! constraint, so the database role needs permission to create extensions.

use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use tracing::info;

/// Embedded booking schema.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the rooms and bookings tables up to date.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(latest, "applying booking schema migrations");
    MIGRATOR.run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_carries_overlap_constraint() {
        let sql: String = MIGRATOR.iter().map(|m| m.sql.as_ref()).collect();
        assert!(sql.contains("btree_gist"));
        assert!(sql.contains("bookings_no_overlap"));
        assert!(sql.contains("'[]'"));
    }
}
