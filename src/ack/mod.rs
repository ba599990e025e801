//! Acknowledgment sources for resuming after a period ends.
//!
//! Typed lines always reach the scheduler through the command channel.
//! An `AcknowledgmentSource` adds an out-of-band way to acknowledge, such
//! as a global key press, without the scheduler knowing which one is used.
//!
//! - `LineAcknowledgment`: default; typed input is the only acknowledgment
//! - `SignalAcknowledgment`: resolves when its `WakeSignal` is raised
//! - `KeyHookAcknowledgment`: global key hook (feature `key-hook`)

#[cfg(feature = "key-hook")]
pub mod key_hook;

#[cfg(feature = "key-hook")]
pub use key_hook::{KeyHookAcknowledgment, ACKNOWLEDGE_KEY};

use std::future::Future;
use std::sync::Arc;

use crate::timer::WakeSignal;

/// Something that can tell the scheduler "the user acknowledged".
pub trait AcknowledgmentSource: Send + Sync + 'static {
    /// Resolves on the next acknowledgment.
    ///
    /// Acknowledgments that happened before this call are discarded.
    fn acknowledged(&self) -> impl Future<Output = ()> + Send;
}

/// Line input only: no extra acknowledgment ever arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineAcknowledgment;

impl AcknowledgmentSource for LineAcknowledgment {
    fn acknowledged(&self) -> impl Future<Output = ()> + Send {
        std::future::pending()
    }
}

/// Acknowledgment driven by raising a shared `WakeSignal`.
#[derive(Debug, Clone, Default)]
pub struct SignalAcknowledgment {
    signal: Arc<WakeSignal>,
}

impl SignalAcknowledgment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the signal that producers raise to acknowledge.
    pub fn signal(&self) -> Arc<WakeSignal> {
        Arc::clone(&self.signal)
    }

    /// Acknowledges directly.
    pub fn acknowledge(&self) {
        self.signal.raise();
    }
}

impl AcknowledgmentSource for SignalAcknowledgment {
    fn acknowledged(&self) -> impl Future<Output = ()> + Send {
        self.signal.reset();
        self.signal.wait()
    }
}
