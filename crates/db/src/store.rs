//! The feedback store seam and its PostgreSQL implementation.
//!
//! [`FeedbackStore`] abstracts the queries this service issues against
//! the host application's `app_feedback` table, so the notification
//! flows can run against the in-memory mock in tests.

use async_trait::async_trait;
use relay_core::types::DbId;

use crate::error::StoreError;
use crate::models::feedback::FeedbackRecord;
use crate::DbPool;

/// Column list for `app_feedback` queries. `type` is a reserved word in
/// Rust, so it is aliased to the model's field name.
const COLUMNS: &str = "id, type AS kind, content, user_id, created_at";

// ---------------------------------------------------------------------------
// FeedbackStore
// ---------------------------------------------------------------------------

/// Read and flag operations against the `app_feedback` table.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Fetch all rows not yet included in a digest, oldest first.
    async fn list_unprocessed(&self) -> Result<Vec<FeedbackRecord>, StoreError>;

    /// Flag the given rows as included in a sent digest.
    ///
    /// Returns the number of rows updated. An empty id list skips the
    /// round-trip and reports zero.
    async fn mark_processed(&self, ids: &[DbId]) -> Result<u64, StoreError>;

    /// Verify the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgresFeedbackStore
// ---------------------------------------------------------------------------

/// [`FeedbackStore`] backed by the shared PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresFeedbackStore {
    pool: DbPool,
}

impl PostgresFeedbackStore {
    /// Create a store over an existing connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PostgresFeedbackStore {
    async fn list_unprocessed(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM app_feedback \
             WHERE is_processed = FALSE \
             ORDER BY created_at ASC"
        );

        let records = sqlx::query_as::<_, FeedbackRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn mark_processed(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("UPDATE app_feedback SET is_processed = TRUE WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
