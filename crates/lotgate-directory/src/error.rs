use thiserror::Error;

/// Directory-specific error types.
///
/// Every variant means "the directory could not answer", which the
/// verification layer surfaces as distinct from "no matching record".
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Database connection or query execution failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Specialized result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
