//! Mock bus publisher for tests.

use crate::error::{BusError, BusResult};
use crate::traits::BusPublisher;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Records every publish instead of talking to a broker.
///
/// Cheap to clone; clones share the record.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    published: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    failing: Arc<AtomicBool>,
}

impl MockBus {
    /// Create a mock bus that accepts every publish.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(topic, payload)` pairs published so far, in order.
    pub fn published(&self) -> Vec<(String, Vec<u8>)> {
        self.published.lock().clone()
    }

    /// Make subsequent publishes fail, simulating a broker outage.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl BusPublisher for MockBus {
    async fn publish(&self, topic: &str, payload: &[u8]) -> BusResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(BusError::Publish("simulated broker outage".into()));
        }
        self.published
            .lock()
            .push((topic.to_string(), payload.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_publishes_in_order() {
        let bus = MockBus::new();
        bus.publish("a", b"1").await.unwrap();
        bus.publish("b", b"2").await.unwrap();

        let published = bus.published();
        assert_eq!(published[0], ("a".to_string(), b"1".to_vec()));
        assert_eq!(published[1], ("b".to_string(), b"2".to_vec()));
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let bus = MockBus::new();
        bus.set_failing(true);
        assert!(bus.publish("a", b"1").await.is_err());
        assert!(bus.published().is_empty());
    }
}
