//! Static configuration constants for the parking gateway.
//!
//! Broker address and topic names are static site configuration, not
//! negotiated at runtime. The values here mirror the deployed site; the
//! gateway binary can override every one of them through its
//! `GatewayConfig` settings.

/// MQTT topic carrying raw tag identifiers published by the remote
/// scanning device (UTF-8 text payloads).
pub const TAG_TOPIC: &str = "parking-system/rfid";

/// MQTT topic the gate actuator listens on.
pub const GATE_TOPIC: &str = "parking-system/servo";

/// Fixed command payload that rotates the gate servo.
pub const GATE_OPEN_COMMAND: &str = "rotate";

/// Default MQTT broker host.
pub const DEFAULT_BROKER_HOST: &str = "192.168.137.182";

/// Default MQTT broker port.
pub const DEFAULT_BROKER_PORT: u16 = 1883;

/// How long `/scan_rfid_arduino` waits for a bus-delivered tag (ms).
pub const DEFAULT_BUS_SCAN_WAIT_MS: u64 = 10_000;

/// How long a local reader read may block before it is abandoned (ms).
pub const DEFAULT_LOCAL_READ_TIMEOUT_MS: u64 = 30_000;

/// Minimum length of a normalized tag identifier.
pub const MIN_TAG_LENGTH: usize = 4;

/// Maximum length of a normalized tag identifier.
pub const MAX_TAG_LENGTH: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_are_distinct() {
        assert_ne!(TAG_TOPIC, GATE_TOPIC);
    }

    #[test]
    fn test_tag_length_bounds_ordered() {
        assert!(MIN_TAG_LENGTH < MAX_TAG_LENGTH);
    }
}
