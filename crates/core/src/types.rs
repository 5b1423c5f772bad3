//! Shared type aliases used across the workspace.

/// Primary keys in the host application's schema are `BIGSERIAL`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
