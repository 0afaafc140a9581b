//! Request slot: at most one generation in flight
//!
//! Each `begin()` aborts the previous ticket and bumps a generation counter.
//! A result is only accepted if its ticket still holds the current generation;
//! anything older is discarded.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracing::debug;

/// Cooperative abort signal passed down to provider calls
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    aborted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abort; wakes every waiter
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Resolve once aborted
    pub async fn aborted(&self) {
        loop {
            let notified = self.notify.notified();
            if self.is_aborted() {
                return;
            }
            notified.await;
        }
    }
}

/// Handle for one in-flight request
#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub generation: u64,
    pub signal: AbortSignal,
}

/// Single-slot holder of the latest request
#[derive(Debug, Default)]
pub struct RequestSlot {
    generation: AtomicU64,
    current: Mutex<Option<AbortSignal>>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, aborting whatever was in flight
    pub fn begin(&self) -> RequestTicket {
        let signal = AbortSignal::new();
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(previous) = current.replace(signal.clone()) {
            debug!("Aborting superseded request (generation {})", generation - 1);
            previous.abort();
        }

        RequestTicket { generation, signal }
    }

    /// Abort the in-flight request without starting another
    pub fn cancel(&self) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = current.take() {
            previous.abort();
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Accept `value` only if `ticket` is still the latest request
    pub fn finish<T>(&self, ticket: &RequestTicket, value: T) -> Option<T> {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if self.generation.load(Ordering::SeqCst) != ticket.generation {
            debug!("Discarding stale result (generation {})", ticket.generation);
            return None;
        }
        current.take();
        Some(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_begin_aborts_previous() {
        let slot = RequestSlot::new();
        let first = slot.begin();
        assert!(!first.signal.is_aborted());

        let second = slot.begin();
        assert!(first.signal.is_aborted());
        assert!(!second.signal.is_aborted());
        assert!(!slot.is_current(&first));
        assert!(slot.is_current(&second));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let slot = RequestSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert_eq!(slot.finish(&first, "old"), None);
        assert_eq!(slot.finish(&second, "new"), Some("new"));
    }

    #[test]
    fn test_cancel_invalidates_ticket() {
        let slot = RequestSlot::new();
        let ticket = slot.begin();
        slot.cancel();
        assert!(ticket.signal.is_aborted());
        assert_eq!(slot.finish(&ticket, 1), None);
    }

    #[tokio::test]
    async fn test_aborted_future_wakes() {
        let signal = AbortSignal::new();
        let waiter = signal.clone();
        let handle = tokio::spawn(async move { waiter.aborted().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        signal.abort();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn test_already_aborted_resolves_immediately() {
        let signal = AbortSignal::new();
        signal.abort();
        tokio::time::timeout(Duration::from_millis(100), signal.aborted())
            .await
            .expect("should resolve");
    }
}
