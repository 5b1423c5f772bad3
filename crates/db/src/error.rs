//! Store-level error type.

/// Error type for data store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query or connection failure from the database driver.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
