//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the Pomodoro Timer CLI.
//! It includes:
//! - Period scheduler with pause, next, restart and quit handling
//! - Auto-resetting wake signal and reminder notifier
//! - Input reader that classifies typed commands
//! - Display utilities for period transitions
//! - Type definitions for configuration and state
//! - Sound playback for period cues
//! - Acknowledgment sources (line input, optional global key hook)

pub mod ack;
pub mod cli;
pub mod sound;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Command, Period, PeriodState, StartKind, TimerConfig};

// Re-export timer types
pub use timer::{Notifier, Scheduler, TimerContext, TimerEvent, WakeSignal};

// Re-export acknowledgment types
pub use ack::{AcknowledgmentSource, LineAcknowledgment, SignalAcknowledgment};

// Re-export sound types
pub use sound::{Cue, CuePlayer, MockCuePlayer, RodioCuePlayer, SoundError, SoundSource};
