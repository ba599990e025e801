//! Sound source selection.
//!
//! Each cue prefers a WAV file from the sound directory and falls back
//! to a synthesized tone when the file is missing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::Cue;

/// Directory, relative to the working directory, searched for cue files.
pub const SOUND_DIR: &str = "sounds";

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk.
    File {
        /// The name of the sound (file stem).
        name: String,
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// A sine tone synthesized at playback time.
    Tone {
        /// Tone frequency in hertz.
        frequency_hz: u32,
        /// How long the tone plays.
        duration: Duration,
    },
}

impl SoundSource {
    /// Returns the synthesized tone used for a cue.
    #[must_use]
    pub fn tone_for(cue: Cue) -> Self {
        let (frequency_hz, millis) = match cue {
            Cue::EndOfPeriod => (660, 900),
            Cue::Reminder => (880, 250),
            Cue::Confirmation => (990, 150),
        };
        Self::Tone {
            frequency_hz,
            duration: Duration::from_millis(millis),
        }
    }

    /// Picks the source for a cue: its file in `sound_dir` if present,
    /// otherwise its tone.
    #[must_use]
    pub fn for_cue(cue: Cue, sound_dir: &Path) -> Self {
        let path = sound_dir.join(cue.file_name());
        if !path.is_file() {
            return Self::tone_for(cue);
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| cue.file_name().to_string());
        Self::File { name, path }
    }
}
