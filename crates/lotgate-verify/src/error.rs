use thiserror::Error;

/// Errors surfaced by direct tag verification.
///
/// "No match found" is not an error — `verify_by_tag` reports it as
/// `Ok(false)`. The variants here are the conditions a caller must be
/// able to tell apart from a genuinely unknown credential.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The submitted tag failed normalization or validation.
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    /// The user directory could not be reached. Retry later; the
    /// credential may well be known.
    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

pub type VerifyResult<T> = Result<T, VerifyError>;
