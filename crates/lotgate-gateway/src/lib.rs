//! HTTP gateway for the Lotgate parking system.
//!
//! The outward-facing surface: an axum router exposing the scan,
//! verification, registration, polling, and gate-trigger endpoints, plus
//! the wiring that runs the bus listener next to the server.
//!
//! # Request flow
//!
//! ```text
//! browser ──HTTP──> routes ──> VerificationCoordinator ──> UserDirectory
//!                      │
//!                      ├──> LocalScanner (exclusive reader access)
//!                      └──> GateTrigger ──MQTT──> actuator
//! ```
//!
//! Every failure is recovered at the request boundary: the caller gets a
//! notice and a redirect to a sensible prior page, never a 500 from
//! domain errors and never a dead process.

pub mod config;
pub mod pages;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use routes::router;
pub use state::AppState;
