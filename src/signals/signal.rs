//! Core signal trait and the constant signal.

/// Common interface for all signal sources.
///
/// Anything that yields audio samples one at a time implements this trait:
/// oscillators, envelopes, noise generators and the combinators that glue
/// them together.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, nominally between -1.0 and 1.0. Generators may exceed
    /// that range transiently; clamping happens only at quantization.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A constant signal that always returns the same value.
///
/// # Examples
///
/// ```
/// use signal_fixtures::{AudioSignalExt, ConstantSignal};
///
/// let mut silence = ConstantSignal::<44100>(0.0);
/// let samples = silence.render(1.0);
/// assert_eq!(samples.len(), 44100);
/// assert!(samples.iter().all(|&s| s == 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal<const SAMPLE_RATE: u32>(pub f64);

impl<const SAMPLE_RATE: u32> ConstantSignal<SAMPLE_RATE> {
    /// A signal that is exactly zero forever.
    pub fn silence() -> Self {
        Self(0.0)
    }
}

impl<const SAMPLE_RATE: u32> Signal for ConstantSignal<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl<const SAMPLE_RATE: u32> From<f64> for ConstantSignal<SAMPLE_RATE> {
    fn from(value: f64) -> Self {
        ConstantSignal::<SAMPLE_RATE>(value)
    }
}

impl<const SAMPLE_RATE: u32> crate::AudioSignal<SAMPLE_RATE> for ConstantSignal<SAMPLE_RATE> {}
