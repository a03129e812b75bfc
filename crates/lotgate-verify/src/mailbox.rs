//! Single-slot mailbox bridging bus events to a bounded wait.

use lotgate_core::{Identity, TagId};
use parking_lot::Mutex;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

/// A completed bus scan: the tag that arrived and its lookup outcome.
///
/// Carrying the outcome alongside the tag means a waiter never re-derives
/// the result from shared state it may be racing against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusScan {
    /// The normalized tag the remote device scanned.
    pub tag: TagId,

    /// The directory match for that tag, if any.
    pub identity: Option<Identity>,
}

/// Single-slot mailbox for bus scans.
///
/// A "latest wins" slot, not a queue: each posted scan overwrites any
/// undelivered predecessor. The waiter clears the slot when its wait
/// begins (a scan from before the wait is stale) and takes the next
/// posted value destructively.
///
/// Waiters are woken by [`Notify`] rather than interval polling, so a
/// scan is observed as soon as it lands.
///
/// # Precondition
///
/// At most one outstanding `wait` at a time. Concurrent waiters are an
/// unsupported configuration: one of them may steal the scan.
#[derive(Debug, Default)]
pub struct ScanMailbox {
    slot: Mutex<Option<BusScan>>,
    notify: Notify,
}

impl ScanMailbox {
    /// Create an empty mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a scan, overwriting any undelivered one, and wake the waiter.
    pub fn post(&self, scan: BusScan) {
        *self.slot.lock() = Some(scan);
        // notify_one stores a permit when nobody is waiting yet, covering
        // the gap between the waiter's slot check and its await.
        self.notify.notify_one();
    }

    /// Clear the slot, then wait until a scan is posted or `timeout`
    /// elapses. Returns `None` on timeout.
    pub async fn wait(&self, timeout: Duration) -> Option<BusScan> {
        *self.slot.lock() = None;
        let deadline = Instant::now() + timeout;

        loop {
            let notified = self.notify.notified();

            if let Some(scan) = self.slot.lock().take() {
                return Some(scan);
            }

            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                // Deadline hit; a scan may still have landed in the gap.
                return self.slot.lock().take();
            }
            // Woken: loop back and take the slot. A stale permit from a
            // pre-wait post just costs one extra iteration.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn scan(tag: &str, name: Option<&str>) -> BusScan {
        BusScan {
            tag: TagId::new(tag).unwrap(),
            identity: name.map(Identity::new),
        }
    }

    #[tokio::test]
    async fn test_post_then_wait_delivers() {
        let mailbox = Arc::new(ScanMailbox::new());
        let waiter = Arc::clone(&mailbox);

        let task = tokio::spawn(async move { waiter.wait(Duration::from_secs(1)).await });
        tokio::task::yield_now().await;
        mailbox.post(scan("ab12cd34", Some("Alice")));

        let got = task.await.unwrap().unwrap();
        assert_eq!(got.tag.as_str(), "ab12cd34");
        assert_eq!(got.identity, Some(Identity::new("Alice")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_times_out_bounded() {
        let mailbox = ScanMailbox::new();

        let started = Instant::now();
        let got = mailbox.wait(Duration::from_millis(200)).await;
        assert!(got.is_none());
        assert!(started.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_wait_clears_stale_scan() {
        let mailbox = ScanMailbox::new();
        mailbox.post(scan("ab12cd34", None));

        // The pre-wait scan is stale and must not satisfy this wait.
        let got = mailbox.wait(Duration::from_millis(50)).await;
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_latest_post_overwrites() {
        let mailbox = Arc::new(ScanMailbox::new());
        let waiter = Arc::clone(&mailbox);

        let task = tokio::spawn(async move { waiter.wait(Duration::from_secs(1)).await });
        tokio::task::yield_now().await;

        mailbox.post(scan("ab12cd34", Some("Alice")));
        mailbox.post(scan("ef56ab78", None));

        // Not a queue: whichever the waiter observes, it is a single
        // coherent scan, and once both land it is the latest.
        let got = task.await.unwrap().unwrap();
        assert!(got.tag.as_str() == "ab12cd34" || got.tag.as_str() == "ef56ab78");
    }
}
