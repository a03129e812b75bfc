//! The shared "currently matched identity" slot.

use lotgate_core::Identity;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Snapshot of the verification state, as reported to pollers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Whether the most recent lookup matched a directory record.
    pub verified: bool,

    /// The matched identity, when `verified`.
    pub identity: Option<Identity>,
}

/// Process-wide single-slot verification state.
///
/// Holds at most one matched identity: the outcome of the most recent
/// completed directory lookup, from either tag source. Empty at startup.
/// Every completed lookup overwrites the slot — set on a hit, cleared on
/// a miss — and the overwrite is atomic under the lock. The slot is never
/// cleared merely because a new scan attempt begins.
///
/// Cheap to clone; clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct VerificationState {
    current: Arc<RwLock<Option<Identity>>>,
}

impl VerificationState {
    /// Create an empty state slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with the outcome of a completed lookup.
    ///
    /// `Some` on a directory hit, `None` on a miss. Latest wins.
    pub async fn record_outcome(&self, identity: Option<Identity>) {
        *self.current.write().await = identity;
    }

    /// Non-blocking-in-spirit read of the current state.
    ///
    /// Takes the read lock only long enough to clone the slot; safe to
    /// call from any number of concurrent pollers.
    pub async fn snapshot(&self) -> Verification {
        let identity = self.current.read().await.clone();
        Verification {
            verified: identity.is_some(),
            identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let state = VerificationState::new();
        let snap = state.snapshot().await;
        assert!(!snap.verified);
        assert!(snap.identity.is_none());
    }

    #[tokio::test]
    async fn test_latest_outcome_wins() {
        let state = VerificationState::new();

        state.record_outcome(Some(Identity::new("Alice"))).await;
        assert!(state.snapshot().await.verified);

        state.record_outcome(None).await;
        let snap = state.snapshot().await;
        assert!(!snap.verified);
        assert!(snap.identity.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_idempotent() {
        let state = VerificationState::new();
        state.record_outcome(Some(Identity::new("Alice"))).await;

        let first = state.snapshot().await;
        let second = state.snapshot().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_snapshot_is_coherent() {
        // verified and identity always agree, whatever the slot holds.
        let state = VerificationState::new();
        for outcome in [Some(Identity::new("Alice")), None] {
            state.record_outcome(outcome).await;
            let snap = state.snapshot().await;
            assert_eq!(snap.verified, snap.identity.is_some());
        }
    }
}
