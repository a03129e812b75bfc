//! The verification coordinator.
//!
//! Turns raw tag identifiers from either source into directory lookups,
//! publishes each outcome as the single current verification state, and
//! bridges asynchronous bus events into a bounded wait.

use crate::error::{VerifyError, VerifyResult};
use crate::mailbox::{BusScan, ScanMailbox};
use crate::state::{Verification, VerificationState};
use lotgate_core::{Identity, TagId};
use lotgate_directory::UserDirectory;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Coordinates tag arrivals, directory lookups, and verification state.
///
/// One coordinator per site. Clones share the same state slot and
/// mailbox, so the bus listener and every request handler observe a
/// single consistent answer.
///
/// # Example
///
/// ```no_run
/// use lotgate_directory::{Database, DatabaseConfig, SqliteUserDirectory};
/// use lotgate_verify::VerificationCoordinator;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = Database::new(DatabaseConfig::new("lotgate.db")).await?;
/// let directory = Arc::new(SqliteUserDirectory::new(db.pool().clone()));
/// let coordinator = VerificationCoordinator::new(directory);
///
/// if coordinator.verify_by_tag("4FA9B2C1").await? {
///     println!("verified: {:?}", coordinator.current_verification().await);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct VerificationCoordinator<D> {
    directory: Arc<D>,
    state: VerificationState,
    mailbox: Arc<ScanMailbox>,
}

impl<D> Clone for VerificationCoordinator<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            state: self.state.clone(),
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}

impl<D: UserDirectory> VerificationCoordinator<D> {
    /// Create a coordinator with an empty verification state.
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            state: VerificationState::new(),
            mailbox: Arc::new(ScanMailbox::new()),
        }
    }

    /// Handle one tag event from the message bus.
    ///
    /// Invoked by the listener for every event, whether or not anyone is
    /// waiting. Looks the tag up, overwrites the verification state with
    /// the outcome (latest wins), then posts the outcome to the mailbox
    /// for any in-flight waiter.
    ///
    /// Never fails: a malformed payload or an unreachable directory is
    /// logged and recorded as the empty outcome, so the listener's
    /// subscription survives.
    pub async fn handle_tag_event(&self, payload: &str) {
        let tag = match TagId::new(payload) {
            Ok(tag) => tag,
            Err(e) => {
                // Garbage on the topic is not a scan: clear the state,
                // post nothing.
                warn!(%e, payload, "discarding malformed bus payload");
                self.state.record_outcome(None).await;
                return;
            }
        };

        info!(tag = %tag, "tag event received from bus");

        let identity = match self.directory.find_first_by_tag(&tag).await {
            Ok(Some(record)) => {
                info!(tag = %tag, name = %record.name, "directory match");
                Some(Identity::new(record.name))
            }
            Ok(None) => {
                info!(tag = %tag, "tag not found in directory");
                None
            }
            Err(e) => {
                // Lookup failure must not kill the listener; record the
                // empty outcome and move on.
                error!(tag = %tag, %e, "directory lookup failed during bus event");
                None
            }
        };

        self.state.record_outcome(identity.clone()).await;
        self.mailbox.post(BusScan { tag, identity });
    }

    /// Wait up to `timeout` for the next bus scan.
    ///
    /// Clears any stale scan first, then suspends until the listener
    /// posts an outcome or the timeout elapses. Returns the full scan —
    /// tag plus lookup outcome — so the caller never has to re-read the
    /// shared state and race the handler.
    ///
    /// At most one outstanding wait at a time (see [`ScanMailbox`]).
    pub async fn await_scan(&self, timeout: Duration) -> Option<BusScan> {
        self.mailbox.wait(timeout).await
    }

    /// Verify a directly submitted tag (typed or confirmed via a form).
    ///
    /// Normalizes, looks up, and overwrites the verification state
    /// exactly like the bus-event path. Returns whether a match was
    /// found.
    ///
    /// # Errors
    /// - `VerifyError::InvalidTag` if the input fails normalization
    /// - `VerifyError::DirectoryUnavailable` if the lookup transport
    ///   fails — distinct from `Ok(false)`, which means the credential is
    ///   genuinely unknown
    pub async fn verify_by_tag(&self, raw: &str) -> VerifyResult<bool> {
        let tag = TagId::new(raw).map_err(|e| VerifyError::InvalidTag(e.to_string()))?;

        let identity = self
            .directory
            .find_first_by_tag(&tag)
            .await
            .map_err(|e| VerifyError::DirectoryUnavailable(e.to_string()))?
            .map(|record| Identity::new(record.name));

        let matched = identity.is_some();
        self.state.record_outcome(identity).await;

        info!(tag = %tag, matched, "direct verification");
        Ok(matched)
    }

    /// Pure read of the current verification state. Never blocks beyond
    /// the snapshot lock; safe for high-frequency polling.
    pub async fn current_verification(&self) -> Verification {
        self.state.snapshot().await
    }
}
