//! Auto-resetting wake signal.
//!
//! A binary event in the style of an auto-reset event: `raise` sets it,
//! and a successful wait clears it again in the same atomic step.
//! Because every successful wait consumes the raise, a waiter can never
//! observe a signal left over from an earlier wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;

/// A single binary, auto-resetting signal.
#[derive(Debug, Default)]
pub struct WakeSignal {
    raised: AtomicBool,
    notify: Notify,
}

impl WakeSignal {
    /// Creates a signal in the cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal. Raising an already raised signal has no effect.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
        self.notify.notify_one();
    }

    /// Clears a raise that nobody has waited for yet.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::Release);
    }

    /// Returns true if the signal is currently raised.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Waits until the signal is raised, then clears it.
    pub async fn wait(&self) {
        loop {
            // Register interest before checking the flag so a raise in
            // between leaves a permit behind.
            let notified = self.notify.notified();
            if self.raised.swap(false, Ordering::AcqRel) {
                return;
            }
            notified.await;
        }
    }

    /// Waits up to `timeout` for the signal.
    ///
    /// Returns true if it was raised before the timeout elapsed; in that
    /// case the signal has been cleared.
    pub async fn wait_timeout(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.wait()).await.is_ok()
    }
}
