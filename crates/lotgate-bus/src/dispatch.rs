//! Enum wrapper for publisher dispatch.
//!
//! Native `async fn` in traits is not object-safe, so the gateway cannot
//! hold `Box<dyn BusPublisher>`. The enum gives it one concrete publisher
//! type with compile-time dispatch: MQTT in production, the mock in tests.

use crate::error::BusResult;
use crate::mock::MockBus;
use crate::mqtt::MqttBus;
use crate::traits::BusPublisher;

/// Concrete publisher dispatch for the gateway.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AnyPublisher {
    /// rumqttc-backed broker connection.
    Mqtt(MqttBus),

    /// Recording mock for tests.
    Mock(MockBus),
}

impl BusPublisher for AnyPublisher {
    async fn publish(&self, topic: &str, payload: &[u8]) -> BusResult<()> {
        match self {
            Self::Mqtt(bus) => bus.publish(topic, payload).await,
            Self::Mock(bus) => bus.publish(topic, payload).await,
        }
    }
}
