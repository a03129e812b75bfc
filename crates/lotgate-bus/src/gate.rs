//! Fire-and-forget gate actuation.

use crate::traits::BusPublisher;
use lotgate_core::constants::{GATE_OPEN_COMMAND, GATE_TOPIC};
use std::sync::Arc;
use tracing::{error, info};

/// Publishes the fixed gate command to the fixed gate topic.
///
/// Unconditional and fire-and-forget: no acknowledgment is awaited, no
/// actuator feedback exists, and a publish failure is logged rather than
/// surfaced — the caller already answered "triggered" either way.
#[derive(Debug, Clone)]
pub struct GateTrigger<P> {
    publisher: Arc<P>,
    topic: String,
    command: String,
}

impl<P: BusPublisher> GateTrigger<P> {
    /// Create a trigger using the site's default topic and command.
    pub fn new(publisher: Arc<P>) -> Self {
        Self::with_topic(publisher, GATE_TOPIC, GATE_OPEN_COMMAND)
    }

    /// Create a trigger with an explicit topic and command payload.
    pub fn with_topic(
        publisher: Arc<P>,
        topic: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            publisher,
            topic: topic.into(),
            command: command.into(),
        }
    }

    /// Publish one gate-open command.
    ///
    /// Every invocation publishes, regardless of verification state or
    /// how recently the gate was triggered.
    pub async fn open(&self) {
        info!(topic = %self.topic, "triggering gate");
        if let Err(e) = self
            .publisher
            .publish(&self.topic, self.command.as_bytes())
            .await
        {
            error!(%e, topic = %self.topic, "gate command publish failed");
        }
    }
}
