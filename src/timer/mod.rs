//! Timer core for the Pomodoro Timer.
//!
//! This module contains the timer/command coordination engine:
//! - `scheduler`: period state machine with timed waits
//! - `signal`: auto-resetting wake signal
//! - `notifier`: reminder loop while awaiting acknowledgment
//! - `context`: state shared with the input reader

pub mod context;
pub mod notifier;
pub mod scheduler;
pub mod signal;

pub use context::TimerContext;
pub use notifier::Notifier;
pub use scheduler::{Scheduler, TimerEvent};
pub use signal::WakeSignal;
