//! In-memory mock store for tests.
//!
//! Enabled through the `test-utils` feature so dependent crates can use
//! it from their own test suites:
//!
//! ```toml
//! [dev-dependencies]
//! relay-db = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use relay_core::types::DbId;

use crate::error::StoreError;
use crate::models::feedback::FeedbackRecord;
use crate::store::FeedbackStore;

#[derive(Debug, Clone)]
struct MockRow {
    record: FeedbackRecord,
    is_processed: bool,
}

/// In-memory [`FeedbackStore`] with scriptable failures.
///
/// Clones share state, so a test can keep one handle for assertions
/// while the service under test holds another.
#[derive(Clone, Default)]
pub struct MockFeedbackStore {
    rows: Arc<Mutex<Vec<MockRow>>>,
    fail_list: Arc<Mutex<bool>>,
    fail_mark: Arc<Mutex<bool>>,
    mark_calls: Arc<Mutex<Vec<Vec<DbId>>>>,
}

impl MockFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an unprocessed record.
    pub fn add_record(&self, record: FeedbackRecord) {
        self.rows.lock().unwrap().push(MockRow {
            record,
            is_processed: false,
        });
    }

    /// Make every subsequent `list_unprocessed` call fail.
    pub fn fail_list_unprocessed(&self) {
        *self.fail_list.lock().unwrap() = true;
    }

    /// Make every subsequent `mark_processed` call fail.
    pub fn fail_mark_processed(&self) {
        *self.fail_mark.lock().unwrap() = true;
    }

    /// Id batches passed to `mark_processed`, in call order.
    pub fn mark_calls(&self) -> Vec<Vec<DbId>> {
        self.mark_calls.lock().unwrap().clone()
    }

    /// Ids currently flagged as processed.
    pub fn processed_ids(&self) -> Vec<DbId> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.is_processed)
            .map(|row| row.record.id)
            .collect()
    }
}

#[async_trait]
impl FeedbackStore for MockFeedbackStore {
    async fn list_unprocessed(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        if *self.fail_list.lock().unwrap() {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| !row.is_processed)
            .map(|row| row.record.clone())
            .collect())
    }

    async fn mark_processed(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        if *self.fail_mark.lock().unwrap() {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }

        self.mark_calls.lock().unwrap().push(ids.to_vec());

        let mut rows = self.rows.lock().unwrap();
        let mut updated = 0;
        for row in rows.iter_mut() {
            if !row.is_processed && ids.contains(&row.record.id) {
                row.is_processed = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
