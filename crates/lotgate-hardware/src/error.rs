//! Error types for local reader operations.

/// Result type alias for hardware operations.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Errors that can occur while reading from the local RFID reader.
///
/// Every variant is recovered at the request boundary; none is fatal to
/// the process.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Reader is not connected or has been disconnected.
    #[error("Reader disconnected: {device}")]
    Disconnected { device: String },

    /// Read timed out after the specified duration.
    #[error("Read timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The reader produced a payload that is not a valid tag identifier.
    #[error("Malformed tag payload: {message}")]
    MalformedPayload { message: String },

    /// Reader communication error.
    #[error("Communication error: {message}")]
    CommunicationError { message: String },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HardwareError {
    /// Create a new disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout(duration_ms: u64) -> Self {
        Self::Timeout { duration_ms }
    }

    /// Create a new malformed payload error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a new communication error.
    pub fn communication(message: impl Into<String>) -> Self {
        Self::CommunicationError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_error() {
        let error = HardwareError::disconnected("MFRC522");
        assert!(matches!(error, HardwareError::Disconnected { .. }));
        assert_eq!(error.to_string(), "Reader disconnected: MFRC522");
    }

    #[test]
    fn test_timeout_error() {
        let error = HardwareError::timeout(30_000);
        assert_eq!(error.to_string(), "Read timeout after 30000ms");
    }

    #[test]
    fn test_malformed_error() {
        let error = HardwareError::malformed("non-hex payload");
        assert_eq!(error.to_string(), "Malformed tag payload: non-hex payload");
    }
}
