//! Submit latch that rejects duplicate submissions.
//!
//! A page acquires a [`SubmitTicket`] before sending a request and holds it
//! until the request settles. While a ticket is alive every other
//! [`SubmitLatch::try_begin`] returns `None`. Dropping the ticket releases the
//! latch, including when the submit future is cancelled mid-flight.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct SubmitLatch {
    busy: Arc<AtomicBool>,
}

impl SubmitLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the latch, or `None` when a submission is already in flight.
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitTicket { busy: Arc::clone(&self.busy) })
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof that the holder owns the latch.
#[derive(Debug)]
pub struct SubmitTicket {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
