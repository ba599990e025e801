//! Sound system error types.
//!
//! Errors here never stop the timer: callers log them and carry on,
//! so a missing speaker or sound file only makes the cue silent.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// No default output device could be opened.
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(#[from] rodio::StreamError),

    /// The cue file could not be opened.
    #[error("cannot open sound file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cue file is not a supported audio format.
    #[error("failed to decode sound file: {0}")]
    DecodeError(#[from] rodio::decoder::DecoderError),

    /// A sink could not be attached to the output stream.
    #[error("failed to create audio sink: {0}")]
    SinkError(#[from] rodio::PlayError),

    /// The audio thread could not be started.
    #[error("failed to start audio thread: {0}")]
    ThreadSpawn(#[source] io::Error),

    /// A cue could not be handed to the audio thread.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to the audio file.
    ///
    /// File errors fall back to the synthesized tone.
    #[must_use]
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::DecodeError(_))
    }
}
