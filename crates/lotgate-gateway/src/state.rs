//! Shared application state for the HTTP handlers.

use lotgate_bus::{AnyPublisher, GateTrigger};
use lotgate_directory::SqliteUserDirectory;
use lotgate_hardware::{AnyReader, LocalScanner};
use lotgate_verify::VerificationCoordinator;
use std::sync::Arc;
use std::time::Duration;

/// The coordinator as the gateway runs it: backed by the SQLite directory.
pub type Coordinator = VerificationCoordinator<SqliteUserDirectory>;

/// Everything a request handler can reach, shared across the router.
///
/// All members are cheap clones over shared inner state; axum clones this
/// per request.
#[derive(Clone)]
pub struct AppState {
    /// The verification coordination core.
    pub coordinator: Coordinator,

    /// Direct directory access, for user registration.
    pub directory: Arc<SqliteUserDirectory>,

    /// Fire-and-forget gate actuation.
    pub gate: GateTrigger<AnyPublisher>,

    /// Exclusive access to the locally attached reader.
    pub scanner: LocalScanner<AnyReader>,

    /// How long `/scan_rfid_arduino` waits for a bus scan.
    pub bus_scan_wait: Duration,
}
