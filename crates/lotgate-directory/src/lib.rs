//! User directory for the Lotgate parking gateway.
//!
//! SQLite-backed persistence for the single directory collection the
//! gateway consults: records mapping a lower-cased RFID tag to a display
//! name.
//!
//! # Architecture
//!
//! - [`Database`] / [`DatabaseConfig`] - connection pool with schema
//!   bootstrap at startup
//! - [`UserDirectory`] - data access trait, mockable for coordinator tests
//! - [`SqliteUserDirectory`] - the sqlx implementation
//!
//! # Lookup semantics
//!
//! The directory deliberately enforces **no uniqueness constraint** on
//! tags. Duplicate registrations are permitted, and lookups return the
//! first match in rowid order: stable, but unspecified to callers.
//! Transport failures are always `Err(DirectoryError)`, never conflated
//! with a missing record.
//!
//! # Example
//!
//! ```no_run
//! use lotgate_directory::{Database, DatabaseConfig, SqliteUserDirectory, UserDirectory};
//! use lotgate_core::TagId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(DatabaseConfig::new("lotgate.db")).await?;
//! let directory = SqliteUserDirectory::new(db.pool().clone());
//!
//! let tag = TagId::new("4fa9b2c1")?;
//! if let Some(record) = directory.find_first_by_tag(&tag).await? {
//!     println!("Matched {}", record.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod models;
pub mod repository;

pub use connection::{Database, DatabaseConfig};
pub use error::{DirectoryError, DirectoryResult};
pub use models::UserRecord;
pub use repository::{SqliteUserDirectory, UserDirectory};
