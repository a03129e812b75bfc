//! Publisher trait definition.

#![allow(async_fn_in_trait)]

use crate::error::BusResult;

/// Fire a payload at a topic on the message bus.
///
/// The gateway publishes exactly one thing — the gate command — but the
/// trait keeps the transport substitutable: [`MqttBus`](crate::MqttBus)
/// in production, [`MockBus`](crate::MockBus) in tests.
pub trait BusPublisher: Send + Sync {
    /// Publish a payload to a topic. No acknowledgment is awaited beyond
    /// handing the message to the transport.
    async fn publish(&self, topic: &str, payload: &[u8]) -> BusResult<()>;
}
