//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::signals::time_at;
use crate::{AudioSignal, Signal};
use std::f64::consts::PI;

/// A pure tone: `sin(2π·f·t) · amplitude`.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
#[derive(Debug, Clone)]
pub struct SineOscillator<const SAMPLE_RATE: u32> {
    frequency: f64,
    amplitude: f64,
    /// Index of the next sample to produce
    index: u64,
}

impl<const SAMPLE_RATE: u32> SineOscillator<SAMPLE_RATE> {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    /// * `amplitude` - Peak amplitude of the output
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_fixtures::{AudioSignalExt, SineOscillator};
    ///
    /// let mut osc = SineOscillator::<44100>::new(440.0, 0.8);
    /// let samples = osc.render(1.0);
    /// assert_eq!(samples.len(), 44100);
    /// ```
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
            index: 0,
        }
    }

    /// Value of the tone at time `t` seconds.
    pub fn value_at(&self, t: f64) -> f64 {
        (2.0 * PI * self.frequency * t).sin() * self.amplitude
    }

    /// Peak amplitude of the output.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<const SAMPLE_RATE: u32> Signal for SineOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = self.value_at(time_at(self.index, SAMPLE_RATE));
        self.index += 1;
        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for SineOscillator<SAMPLE_RATE> {}

impl<const SAMPLE_RATE: u32> Oscillator for SineOscillator<SAMPLE_RATE> {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
