//! Gateway configuration.
//!
//! Struct-based with builder setters and `LOTGATE_*` environment
//! overrides. Broker address and topic names are static site
//! configuration; nothing is negotiated at runtime.

use lotgate_core::constants::{
    DEFAULT_BROKER_HOST, DEFAULT_BROKER_PORT, DEFAULT_BUS_SCAN_WAIT_MS,
    DEFAULT_LOCAL_READ_TIMEOUT_MS, GATE_TOPIC, TAG_TOPIC,
};
use lotgate_core::{Error, Result};
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the gateway binary
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// MQTT broker host
    pub broker_host: String,

    /// MQTT broker port
    pub broker_port: u16,

    /// Topic carrying raw tag identifiers from the remote scanner
    pub tag_topic: String,

    /// Topic the gate actuator listens on
    pub gate_topic: String,

    /// Path to the SQLite directory database
    pub database_path: String,

    /// How long `/scan_rfid_arduino` waits for a bus scan
    pub bus_scan_wait: Duration,

    /// How long `/scan_rfid` lets the local read block
    pub local_read_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            broker_host: DEFAULT_BROKER_HOST.to_string(),
            broker_port: DEFAULT_BROKER_PORT,
            tag_topic: TAG_TOPIC.to_string(),
            gate_topic: GATE_TOPIC.to_string(),
            database_path: "lotgate.db".to_string(),
            bus_scan_wait: Duration::from_millis(DEFAULT_BUS_SCAN_WAIT_MS),
            local_read_timeout: Duration::from_millis(DEFAULT_LOCAL_READ_TIMEOUT_MS),
        }
    }
}

impl GatewayConfig {
    /// Defaults overridden by any `LOTGATE_*` environment variables set.
    ///
    /// # Errors
    /// Returns `Error::Config` if a set variable fails to parse.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("LOTGATE_BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .map_err(|_| Error::Config(format!("invalid LOTGATE_BIND_ADDR: {addr}")))?;
        }
        if let Ok(host) = std::env::var("LOTGATE_BROKER_HOST") {
            config.broker_host = host;
        }
        if let Ok(port) = std::env::var("LOTGATE_BROKER_PORT") {
            config.broker_port = port
                .parse()
                .map_err(|_| Error::Config(format!("invalid LOTGATE_BROKER_PORT: {port}")))?;
        }
        if let Ok(topic) = std::env::var("LOTGATE_TAG_TOPIC") {
            config.tag_topic = topic;
        }
        if let Ok(topic) = std::env::var("LOTGATE_GATE_TOPIC") {
            config.gate_topic = topic;
        }
        if let Ok(path) = std::env::var("LOTGATE_DB_PATH") {
            config.database_path = path;
        }
        if let Ok(ms) = std::env::var("LOTGATE_BUS_SCAN_WAIT_MS") {
            let ms: u64 = ms
                .parse()
                .map_err(|_| Error::Config(format!("invalid LOTGATE_BUS_SCAN_WAIT_MS: {ms}")))?;
            config.bus_scan_wait = Duration::from_millis(ms);
        }
        if let Ok(ms) = std::env::var("LOTGATE_LOCAL_READ_TIMEOUT_MS") {
            let ms: u64 = ms.parse().map_err(|_| {
                Error::Config(format!("invalid LOTGATE_LOCAL_READ_TIMEOUT_MS: {ms}"))
            })?;
            config.local_read_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Set the HTTP bind address
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the SQLite database path
    pub fn database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the bus scan wait window
    pub fn bus_scan_wait(mut self, wait: Duration) -> Self {
        self.bus_scan_wait = wait;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site() {
        let config = GatewayConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.tag_topic, "parking-system/rfid");
        assert_eq!(config.gate_topic, "parking-system/servo");
        assert_eq!(config.bus_scan_wait, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_setters() {
        let config = GatewayConfig::default()
            .database_path("/tmp/test.db")
            .bus_scan_wait(Duration::from_millis(250));
        assert_eq!(config.database_path, "/tmp/test.db");
        assert_eq!(config.bus_scan_wait, Duration::from_millis(250));
    }
}
