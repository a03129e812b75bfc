//! Local scan trigger.
//!
//! One blocking read from the attached reader per invocation, with the
//! three guarantees the rest of the gateway relies on:
//!
//! - the read is never invoked concurrently with itself (the physical
//!   reader is exclusive per device),
//! - the result is normalized before anyone else sees it,
//! - the reader's low-level pin state is released on every exit path,
//!   success or failure.

use crate::error::{HardwareError, Result};
use crate::traits::RfidReader;
use lotgate_core::TagId;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Scoped acquisition of the reader's low-level pin state.
///
/// Real MFRC522-style readers leave GPIO pins claimed after a read unless
/// explicitly cleaned up. The release is tied to `Drop`, so it holds on
/// every exit path, including errors and timeouts.
#[derive(Debug)]
pub struct PinGuard {
    held: Arc<AtomicBool>,
}

impl PinGuard {
    fn acquire(held: Arc<AtomicBool>) -> Self {
        held.store(true, Ordering::SeqCst);
        PinGuard { held }
    }
}

impl Drop for PinGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::SeqCst);
        debug!("reader pin state released");
    }
}

/// Exclusive-access wrapper around a local reader.
///
/// Cheap to clone; all clones serialize on the same inner lock.
#[derive(Debug)]
pub struct LocalScanner<R: RfidReader> {
    reader: Arc<Mutex<R>>,
    pins_held: Arc<AtomicBool>,
    read_timeout: Duration,
}

impl<R: RfidReader> Clone for LocalScanner<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            pins_held: Arc::clone(&self.pins_held),
            read_timeout: self.read_timeout,
        }
    }
}

impl<R: RfidReader> LocalScanner<R> {
    /// Wrap a reader with the given read timeout.
    pub fn new(reader: R, read_timeout: Duration) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
            pins_held: Arc::new(AtomicBool::new(false)),
            read_timeout,
        }
    }

    /// Perform one exclusive read and normalize the result.
    ///
    /// Blocks (cooperatively) until a tag is presented or the read timeout
    /// elapses. Concurrent callers queue on the internal lock rather than
    /// touching the reader simultaneously.
    ///
    /// # Errors
    /// - `HardwareError::Timeout` if nothing is presented in time
    /// - `HardwareError::MalformedPayload` if the payload is not a valid tag
    /// - any error the reader itself reports
    pub async fn scan_once(&self) -> Result<TagId> {
        let mut reader = self.reader.lock().await;
        let _pins = PinGuard::acquire(Arc::clone(&self.pins_held));

        debug!(reader = reader.name(), "waiting for tag at local reader");

        let raw = tokio::time::timeout(self.read_timeout, reader.read_raw())
            .await
            .map_err(|_| {
                warn!(reader = reader.name(), "local read timed out");
                HardwareError::timeout(self.read_timeout.as_millis() as u64)
            })??;

        TagId::new(&raw).map_err(|e| HardwareError::malformed(e.to_string()))
    }

    /// Whether the reader's pin state is currently claimed. Test hook.
    pub fn pins_held(&self) -> bool {
        self.pins_held.load(Ordering::SeqCst)
    }
}
