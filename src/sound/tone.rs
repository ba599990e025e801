//! Synthesized fallback tones.

use std::time::Duration;

use rodio::source::{SineWave, Source};

/// Output gain applied to synthesized tones.
pub const TONE_AMPLITUDE: f32 = 0.2;

/// Builds a sine tone of the given frequency and length.
pub fn tone(frequency_hz: u32, duration: Duration) -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(frequency_hz as f32)
        .take_duration(duration)
        .amplify(TONE_AMPLITUDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_stays_within_amplitude() {
        let peak = tone(440, Duration::from_millis(20))
            .map(f32::abs)
            .fold(0.0_f32, f32::max);
        assert!(peak > 0.0);
        assert!(peak <= TONE_AMPLITUDE + f32::EPSILON);
    }

    #[test]
    fn test_tone_is_finite() {
        let samples = tone(880, Duration::from_millis(10)).count();
        assert!(samples > 0);
        assert!(samples < 48_000);
    }
}
