//! Sound playback system for the Pomodoro Timer.
//!
//! This module provides the audible cues played at period boundaries:
//!
//! - A cue per event (period end, reminder, confirmation)
//! - WAV files from `sounds/` with synthesized tone fallback
//! - Non-blocking playback on a dedicated audio thread
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   crossbeam   ┌──────────────────┐
//! │  RodioCuePlayer  │ ────────────▶ │   audio thread   │
//! │  (Send + Sync)   │     Cue       │  (OutputStream)  │
//! └──────────────────┘               └────────┬─────────┘
//!                                             │
//!                                             ▼
//!                                    ┌──────────────────┐
//!                                    │   SoundSource    │
//!                                    │  file or tone    │
//!                                    └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pomodoro::sound::{Cue, CuePlayer, RodioCuePlayer, SOUND_DIR};
//!
//! let player = RodioCuePlayer::spawn(SOUND_DIR).expect("audio thread");
//! if let Err(e) = player.play(Cue::EndOfPeriod) {
//!     eprintln!("Could not play cue: {}", e);
//! }
//! ```

mod error;
mod player;
mod source;
mod tone;

pub use error::SoundError;
pub use player::RodioCuePlayer;
pub use source::{SoundSource, SOUND_DIR};
pub use tone::{tone, TONE_AMPLITUDE};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Audible cues played by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A period just ended
    EndOfPeriod,
    /// Repeated while waiting for acknowledgment
    Reminder,
    /// The period end was acknowledged
    Confirmation,
}

impl Cue {
    /// Returns the file name looked up in the sound directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Cue::EndOfPeriod => "lingeringbells.wav",
            Cue::Reminder => "notify.wav",
            Cue::Confirmation => "confirm.wav",
        }
    }
}

/// Trait for cue playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait CuePlayer: Send + Sync {
    /// Plays a cue.
    ///
    /// This method should be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails. Callers treat this as a no-op.
    fn play(&self, cue: Cue) -> Result<(), SoundError>;
}

impl CuePlayer for RodioCuePlayer {
    fn play(&self, cue: Cue) -> Result<(), SoundError> {
        RodioCuePlayer::play(self, cue)
    }
}

/// Mock cue player for testing.
#[derive(Debug, Default)]
pub struct MockCuePlayer {
    play_calls: Mutex<Vec<Cue>>,
    should_fail: AtomicBool,
}

impl MockCuePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    /// Number of times the given cue was played.
    #[must_use]
    pub fn count_of(&self, cue: Cue) -> usize {
        self.play_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|played| **played == cue)
            .count()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<Cue> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl CuePlayer for MockCuePlayer {
    fn play(&self, cue: Cue) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(cue);
        Ok(())
    }
}
