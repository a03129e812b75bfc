//! MQTT transport backed by rumqttc.

use crate::error::BusResult;
use crate::traits::BusPublisher;
use lotgate_core::constants::{DEFAULT_BROKER_HOST, DEFAULT_BROKER_PORT};
use rumqttc::{AsyncClient, EventLoop, MqttOptions, QoS};
use std::time::Duration;

/// Configuration for the MQTT connection
///
/// # Example
///
/// ```
/// use lotgate_bus::BusConfig;
///
/// let config = BusConfig::new("192.168.137.182", 1883)
///     .client_id("lotgate-gateway");
/// ```
#[derive(Debug, Clone)]
pub struct BusConfig {
    /// Broker host name or IP address
    pub host: String,

    /// Broker port
    pub port: u16,

    /// MQTT client identifier
    pub client_id: String,

    /// Keep-alive interval
    pub keep_alive: Duration,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BROKER_HOST.to_string(),
            port: DEFAULT_BROKER_PORT,
            client_id: "lotgate-gateway".to_string(),
            keep_alive: Duration::from_secs(30),
        }
    }
}

impl BusConfig {
    /// Create a configuration for the given broker address
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the MQTT client identifier
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = id.into();
        self
    }
}

/// MQTT-backed bus handle.
///
/// Cloneable; all clones share the underlying rumqttc client. The paired
/// [`EventLoop`] must be driven (see [`run_listener`]) for any traffic —
/// publishes included — to make progress.
///
/// [`run_listener`]: crate::listener::run_listener
#[derive(Debug, Clone)]
pub struct MqttBus {
    client: AsyncClient,
}

impl MqttBus {
    /// Create the client and its event loop from configuration.
    ///
    /// No I/O happens here; the connection is established lazily when the
    /// event loop is first polled.
    pub fn connect(config: &BusConfig) -> (Self, EventLoop) {
        let mut options = MqttOptions::new(&config.client_id, &config.host, config.port);
        options.set_keep_alive(config.keep_alive);

        let (client, eventloop) = AsyncClient::new(options, 16);
        (Self { client }, eventloop)
    }

    /// Handle to the underlying rumqttc client, for the listener task.
    pub fn client(&self) -> AsyncClient {
        self.client.clone()
    }
}

impl BusPublisher for MqttBus {
    async fn publish(&self, topic: &str, payload: &[u8]) -> BusResult<()> {
        self.client
            .publish(topic, QoS::AtMostOnce, false, payload)
            .await?;
        Ok(())
    }
}
