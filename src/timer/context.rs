//! State shared between the input reader and the scheduler.

use std::sync::atomic::{AtomicBool, Ordering};

/// Owned context passed to both threads of control.
///
/// The scheduler is the only writer; the input reader only reads.
#[derive(Debug, Default)]
pub struct TimerContext {
    awaiting_acknowledgment: AtomicBool,
}

impl TimerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the scheduler as blocked on a generic "resume" acknowledgment.
    pub fn enter_acknowledgment_mode(&self) {
        self.awaiting_acknowledgment.store(true, Ordering::Release);
    }

    /// Marks the scheduler as back to waiting out a normal period.
    pub fn leave_acknowledgment_mode(&self) {
        self.awaiting_acknowledgment.store(false, Ordering::Release);
    }

    /// Returns true if any typed line should count as an acknowledgment.
    pub fn is_awaiting_acknowledgment(&self) -> bool {
        self.awaiting_acknowledgment.load(Ordering::Acquire)
    }
}
