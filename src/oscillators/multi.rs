//! Multi-channel tone generator.

use super::{Oscillator, SineOscillator};
use crate::Signal;
use crate::signals::frame_count;

/// Independent pure tones, one per channel, interleaved frame by frame.
///
/// # Examples
///
/// ```
/// use signal_fixtures::MultiToneOscillator;
///
/// let mut stereo = MultiToneOscillator::<44100>::new(&[440.0, 880.0], 0.8);
/// assert_eq!(stereo.channels(), 2);
/// assert_eq!(stereo.render(2.0).len(), 2 * 88200);
/// ```
#[derive(Debug, Clone)]
pub struct MultiToneOscillator<const SAMPLE_RATE: u32> {
    voices: Vec<SineOscillator<SAMPLE_RATE>>,
}

impl<const SAMPLE_RATE: u32> MultiToneOscillator<SAMPLE_RATE> {
    /// Creates one tone per entry of `frequencies`, all at `amplitude`.
    pub fn new(frequencies: &[f64], amplitude: f64) -> Self {
        Self {
            voices: frequencies
                .iter()
                .map(|&f| SineOscillator::new(f, amplitude))
                .collect(),
        }
    }

    /// Number of output channels.
    pub fn channels(&self) -> u16 {
        self.voices.len() as u16
    }

    /// Writes the next frame, one sample per channel, into `frame`.
    ///
    /// `frame` must hold at least `channels()` samples.
    pub fn next_frame(&mut self, frame: &mut [f64]) {
        for (slot, voice) in frame.iter_mut().zip(self.voices.iter_mut()) {
            *slot = voice.next_sample();
        }
    }

    /// Renders `duration` seconds as interleaved samples.
    ///
    /// The result holds `frame_count(duration, SAMPLE_RATE) * channels()` samples.
    pub fn render(&mut self, duration: f64) -> Vec<f64> {
        let channels = self.voices.len();
        let frames = frame_count(duration, SAMPLE_RATE);
        let mut samples = vec![0.0; frames * channels];
        if channels > 0 {
            for frame in samples.chunks_exact_mut(channels) {
                self.next_frame(frame);
            }
        }
        samples
    }

    /// Rewinds every channel to t = 0.
    pub fn reset(&mut self) {
        for voice in &mut self.voices {
            voice.reset();
        }
    }
}
