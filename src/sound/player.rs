//! Cue player implementation using rodio.
//!
//! rodio's `OutputStream` must stay on the thread that created it, so the
//! `RodioCuePlayer` owns a dedicated audio thread and hands cues to it over
//! a crossbeam channel. The handle itself is `Send + Sync`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::SoundSource;
use super::tone::tone;
use super::Cue;

/// A cue player backed by a rodio output stream on its own thread.
///
/// Playback is non-blocking; cues are queued and play in the background.
#[derive(Debug)]
pub struct RodioCuePlayer {
    /// Queue feeding the audio thread.
    cue_tx: Sender<Cue>,
}

impl RodioCuePlayer {
    /// Starts the audio thread and returns a handle to it.
    ///
    /// A missing audio device is not an error here: the thread logs it once
    /// and then drops every cue.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::ThreadSpawn` if the audio thread cannot be spawned.
    pub fn spawn(sound_dir: impl Into<PathBuf>) -> Result<Self, SoundError> {
        let sound_dir = sound_dir.into();
        let (cue_tx, cue_rx) = crossbeam_channel::unbounded();

        thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || run_audio_thread(cue_rx, sound_dir))
            .map_err(SoundError::ThreadSpawn)?;

        Ok(Self { cue_tx })
    }

    /// Queues a cue for playback.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::PlaybackError` if the audio thread has exited.
    pub fn play(&self, cue: Cue) -> Result<(), SoundError> {
        self.cue_tx
            .send(cue)
            .map_err(|_| SoundError::PlaybackError("audio thread has stopped".to_string()))
    }
}

/// Body of the audio thread. Exits when every `RodioCuePlayer` handle is dropped.
fn run_audio_thread(cue_rx: Receiver<Cue>, sound_dir: PathBuf) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let err = SoundError::from(e);
            warn!("Audio not available, cues are silent: {}", err);
            for cue in cue_rx.iter() {
                debug!("No audio device, dropping {:?}", cue);
            }
            return;
        }
    };

    debug!("Audio output stream initialized");
    let output = AudioOutput { handle, sound_dir };

    for cue in cue_rx.iter() {
        if let Err(e) = output.play(cue) {
            warn!("Failed to play {:?} cue: {}", cue, e);
        }
    }

    debug!("Audio thread exiting");
}

/// Output side of the audio thread.
struct AudioOutput {
    handle: OutputStreamHandle,
    sound_dir: PathBuf,
}

impl AudioOutput {
    /// Plays a cue, falling back to its tone when the file cannot be used.
    fn play(&self, cue: Cue) -> Result<(), SoundError> {
        match SoundSource::for_cue(cue, &self.sound_dir) {
            SoundSource::File { path, name } => {
                debug!("Playing sound file: {}", name);
                match self.play_file(&path) {
                    Ok(()) => Ok(()),
                    Err(e) if e.is_file_error() => {
                        warn!("Failed to play '{}': {}, falling back to tone", name, e);
                        self.play_source(SoundSource::tone_for(cue))
                    }
                    Err(e) => Err(e),
                }
            }
            source => self.play_source(source),
        }
    }

    fn play_source(&self, source: SoundSource) -> Result<(), SoundError> {
        match source {
            SoundSource::File { path, .. } => self.play_file(&path),
            SoundSource::Tone {
                frequency_hz,
                duration,
            } => {
                debug!("Playing {} Hz tone", frequency_hz);
                self.play_decoded(tone(frequency_hz, duration))
            }
        }
    }

    /// Plays a sound file from the filesystem.
    fn play_file(&self, path: &Path) -> Result<(), SoundError> {
        let file = File::open(path).map_err(|source| SoundError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let decoder = Decoder::new(BufReader::new(file))?;

        self.play_decoded(decoder.convert_samples())
    }

    /// Plays a decoded audio source.
    fn play_decoded(&self, source: impl Source<Item = f32> + Send + 'static) -> Result<(), SoundError> {
        let sink = Sink::try_new(&self.handle)?;

        sink.append(source);
        sink.detach(); // Non-blocking: sound continues after function returns

        debug!("Sound playback started (detached)");
        Ok(())
    }
}
