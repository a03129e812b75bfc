use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored directory record mapping a tag to a display name.
///
/// `rfid_tag` is stored lower-cased; [`TagId`](lotgate_core::TagId)
/// guarantees queries arrive the same way. No uniqueness constraint:
/// several records may carry the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// Technical key (rowid).
    pub id: i64,

    /// Normalized tag identifier (lower-case hex).
    pub rfid_tag: String,

    /// Display name shown on the status pages.
    pub name: String,

    /// Registration time.
    pub created_at: DateTime<Utc>,
}
