//! Data access for the feedback relay.
//!
//! Connection pool helpers, the `app_feedback` row model with its webhook
//! DTOs, and the [`FeedbackStore`] seam with its PostgreSQL
//! implementation. The feature-gated [`mock`] module provides an
//! in-memory store for tests.

pub mod error;
pub mod models;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::StoreError;
pub use store::{FeedbackStore, PostgresFeedbackStore};

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from the crate's `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
