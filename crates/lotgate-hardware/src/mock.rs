//! Mock RFID reader for testing and development.
//!
//! Simulates the physically attached reader: tags are "presented" through
//! a controller handle and observed by whoever is blocked in `read_raw`.

use crate::error::{HardwareError, Result};
use crate::traits::RfidReader;
use tokio::sync::mpsc;

/// Mock RFID reader driven programmatically through [`MockReaderHandle`].
///
/// # Examples
///
/// ```
/// use lotgate_hardware::mock::MockReader;
/// use lotgate_hardware::traits::RfidReader;
///
/// #[tokio::main]
/// async fn main() -> lotgate_hardware::Result<()> {
///     let (mut reader, handle) = MockReader::new();
///
///     handle.present_tag("4FA9B2C1").await;
///     let raw = reader.read_raw().await?;
///     assert_eq!(raw, "4FA9B2C1");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockReader {
    event_rx: mpsc::Receiver<ReaderEvent>,
    name: String,
}

/// Controller handle for simulating tag presentations.
#[derive(Debug, Clone)]
pub struct MockReaderHandle {
    event_tx: mpsc::Sender<ReaderEvent>,
}

#[derive(Debug)]
enum ReaderEvent {
    TagPresented(String),
    Fault(String),
}

impl MockReader {
    /// Create a new mock reader with the default name.
    pub fn new() -> (Self, MockReaderHandle) {
        Self::with_name("Mock RFID Reader".to_string())
    }

    /// Create a new mock reader with a custom name.
    pub fn with_name(name: String) -> (Self, MockReaderHandle) {
        let (event_tx, event_rx) = mpsc::channel(32);
        (Self { event_rx, name }, MockReaderHandle { event_tx })
    }
}

impl MockReaderHandle {
    /// Present a tag to the reader. The payload is delivered verbatim,
    /// unnormalized, exactly as real hardware would report it.
    pub async fn present_tag(&self, raw: impl Into<String>) {
        // Ignore send failure: the reader half was dropped, nothing to observe.
        let _ = self
            .event_tx
            .send(ReaderEvent::TagPresented(raw.into()))
            .await;
    }

    /// Inject a hardware fault observed by the next read.
    pub async fn inject_fault(&self, message: impl Into<String>) {
        let _ = self.event_tx.send(ReaderEvent::Fault(message.into())).await;
    }
}

impl RfidReader for MockReader {
    async fn read_raw(&mut self) -> Result<String> {
        let event = self
            .event_rx
            .recv()
            .await
            .ok_or_else(|| HardwareError::disconnected(self.name.clone()))?;

        match event {
            ReaderEvent::TagPresented(raw) => Ok(raw),
            ReaderEvent::Fault(message) => Err(HardwareError::communication(message)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_present_and_read() {
        let (mut reader, handle) = MockReader::new();
        handle.present_tag("ab12cd34").await;

        let raw = reader.read_raw().await.unwrap();
        assert_eq!(raw, "ab12cd34");
    }

    #[tokio::test]
    async fn test_fault_surfaces_as_communication_error() {
        let (mut reader, handle) = MockReader::new();
        handle.inject_fault("antenna fault").await;

        let err = reader.read_raw().await.unwrap_err();
        assert!(matches!(err, HardwareError::CommunicationError { .. }));
    }

    #[tokio::test]
    async fn test_dropped_handle_reads_as_disconnected() {
        let (mut reader, handle) = MockReader::new();
        drop(handle);

        let err = reader.read_raw().await.unwrap_err();
        assert!(matches!(err, HardwareError::Disconnected { .. }));
    }
}
