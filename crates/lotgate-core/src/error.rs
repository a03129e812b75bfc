use thiserror::Error;

/// Errors shared across the gateway workspace.
///
/// Transport-specific failures live in the per-crate error types
/// (`HardwareError`, `DirectoryError`, `BusError`, `VerifyError`); this
/// enum covers the concerns the shared types themselves raise.
#[derive(Error, Debug)]
pub enum Error {
    /// Tag identifier failed normalization or validation.
    #[error("Invalid tag format: {0}")]
    InvalidTagFormat(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
