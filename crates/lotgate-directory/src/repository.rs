#![allow(async_fn_in_trait)]

use crate::error::DirectoryResult;
use crate::models::UserRecord;
use chrono::Utc;
use lotgate_core::TagId;
use sqlx::SqlitePool;

/// Data access trait for the user directory.
///
/// The verification coordinator consumes this trait; tests substitute an
/// in-memory implementation. Uses native async trait methods (Edition
/// 2024), so no `async_trait` macro is involved.
pub trait UserDirectory: Send + Sync {
    /// Find the first record whose stored tag equals the query.
    ///
    /// Duplicate tags are not an error; only the first encountered (rowid
    /// order) is returned. `Ok(None)` means the tag is genuinely unknown;
    /// transport failure is `Err` and must never collapse into `None`.
    async fn find_first_by_tag(&self, tag: &TagId) -> DirectoryResult<Option<UserRecord>>;

    /// Insert a new record. No uniqueness check is performed.
    async fn add_user(&self, tag: &TagId, name: &str) -> DirectoryResult<i64>;
}

/// SQLite implementation of [`UserDirectory`]
#[derive(Debug, Clone)]
pub struct SqliteUserDirectory {
    pool: SqlitePool,
}

impl SqliteUserDirectory {
    /// Create a new SQLite user directory
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserDirectory for SqliteUserDirectory {
    async fn find_first_by_tag(&self, tag: &TagId) -> DirectoryResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, rfid_tag, name, created_at
            FROM users
            WHERE rfid_tag = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(tag.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn add_user(&self, tag: &TagId, name: &str) -> DirectoryResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (rfid_tag, name, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(tag.as_str())
        .bind(name)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
