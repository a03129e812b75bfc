use crate::{
    Result,
    constants::{MAX_TAG_LENGTH, MIN_TAG_LENGTH},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized RFID tag identifier (lower-case hexadecimal).
///
/// Both tag sources — the local reader and the remote scanner on the
/// message bus — produce raw strings of uncertain casing and padding.
/// `TagId` is the single normalization point: construction trims, lowers,
/// and validates, so every comparison downstream is byte equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    /// Create a tag identifier with normalization and validation.
    ///
    /// The input is trimmed and converted to lower case before validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagFormat` if:
    /// - The normalized length is not between 4-32 characters
    /// - The tag contains non-hexadecimal characters
    pub fn new(raw: &str) -> Result<Self> {
        let tag = raw.trim().to_lowercase();

        let len = tag.len();
        if !(MIN_TAG_LENGTH..=MAX_TAG_LENGTH).contains(&len) {
            return Err(Error::InvalidTagFormat(format!(
                "Tag must be {MIN_TAG_LENGTH}-{MAX_TAG_LENGTH} chars, got {len}"
            )));
        }

        if !tag.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidTagFormat(format!(
                "Tag must be hexadecimal: {tag}"
            )));
        }

        Ok(TagId(tag))
    }

    /// Get the normalized tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TagId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TagId::new(s)
    }
}

/// Identity matched from the user directory.
///
/// The directory associates each stored tag with a display name; the
/// coordinator holds at most a transient copy of the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name of the matched user.
    pub name: String,
}

impl Identity {
    /// Create an identity from a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Identity { name: name.into() }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
