//! Message bus layer for the Lotgate parking gateway.
//!
//! One MQTT broker, two topics: the gateway subscribes to the tag topic
//! (raw tag identifiers published by the remote scanning device) and
//! publishes a fixed command to the gate topic to trigger the actuator.
//!
//! # Architecture
//!
//! ```text
//! Remote scanner ──(tag topic)──> listener task ──> VerificationCoordinator
//!
//! HTTP /open_gate ──> GateTrigger ──(gate topic)──> gate actuator
//! ```
//!
//! # Components
//!
//! - [`BusPublisher`] - publish trait, mockable for tests
//! - [`MqttBus`] / [`BusConfig`] - rumqttc-backed implementation
//! - [`listener`] - long-lived subscription with reconnect-with-backoff
//! - [`GateTrigger`] - fire-and-forget gate actuation
//! - [`MockBus`] - records publishes for tests

pub mod dispatch;
pub mod error;
pub mod gate;
pub mod listener;
pub mod mock;
pub mod mqtt;
pub mod traits;

pub use dispatch::AnyPublisher;
pub use error::{BusError, BusResult};
pub use gate::GateTrigger;
pub use listener::{ListenerConfig, run_listener};
pub use mock::MockBus;
pub use mqtt::{BusConfig, MqttBus};
pub use traits::BusPublisher;
