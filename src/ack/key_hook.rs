//! Global key hook acknowledgment using rdev.
//!
//! A listener thread watches every key press on the system; pressing
//! `ACKNOWLEDGE_KEY` acknowledges a period end even when the terminal
//! does not have focus.

use std::future::Future;
use std::io;
use std::thread;

use rdev::{listen, Event, EventType, Key};
use tracing::{debug, warn};

use super::{AcknowledgmentSource, SignalAcknowledgment};

/// Key that acknowledges a period end.
pub const ACKNOWLEDGE_KEY: Key = Key::ScrollLock;

/// Acknowledgment raised by a global key press.
#[derive(Debug, Clone)]
pub struct KeyHookAcknowledgment {
    inner: SignalAcknowledgment,
}

impl KeyHookAcknowledgment {
    /// Starts the key listener thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener thread cannot be spawned.
    pub fn spawn(key: Key) -> io::Result<Self> {
        let inner = SignalAcknowledgment::new();
        let signal = inner.signal();

        thread::Builder::new()
            .name("key-hook".to_string())
            .spawn(move || {
                let result = listen(move |event: Event| {
                    if is_acknowledge_event(&event.event_type, key) {
                        debug!("Acknowledge key pressed: {:?}", key);
                        signal.raise();
                    }
                });
                if let Err(e) = result {
                    warn!("Global key hook unavailable: {:?}", e);
                }
            })?;

        Ok(Self { inner })
    }
}

impl AcknowledgmentSource for KeyHookAcknowledgment {
    fn acknowledged(&self) -> impl Future<Output = ()> + Send {
        self.inner.acknowledged()
    }
}

/// Returns true if the event is a press of `key`.
pub fn is_acknowledge_event(event: &EventType, key: Key) -> bool {
    matches!(event, EventType::KeyPress(pressed) if *pressed == key)
}
