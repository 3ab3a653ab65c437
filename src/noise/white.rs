//! White noise generator implementation.

use crate::{AudioSignal, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform sample in `[-amplitude, amplitude]`.
pub(crate) fn uniform_band<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    rng.gen_range(-amplitude..=amplitude)
}

/// A white noise generator.
///
/// Each sample is uniformly distributed in `[-amplitude, amplitude]`. Keeping
/// the amplitude below 1.0 leaves headroom before quantization.
///
/// The random source is owned by the generator. Use [`WhiteNoise::seeded`]
/// for reproducible output.
pub struct WhiteNoise<const SAMPLE_RATE: u32, R: Rng = rand::rngs::ThreadRng> {
    amplitude: f64,
    rng: R,
}

impl<const SAMPLE_RATE: u32> WhiteNoise<SAMPLE_RATE, rand::rngs::ThreadRng> {
    /// Creates a white noise generator backed by the thread-local RNG.
    ///
    /// Output differs on every run; assert only statistical properties.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_fixtures::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::<44100>::new(0.8);
    /// let sample = noise.next_sample();
    /// assert!(sample.abs() <= 0.8);
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self {
            amplitude,
            rng: rand::thread_rng(),
        }
    }
}

impl<const SAMPLE_RATE: u32> WhiteNoise<SAMPLE_RATE, StdRng> {
    /// Creates a reproducible white noise generator from a fixed seed.
    pub fn seeded(amplitude: f64, seed: u64) -> Self {
        Self::with_rng(amplitude, StdRng::seed_from_u64(seed))
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> WhiteNoise<SAMPLE_RATE, R> {
    /// Creates a white noise generator with a caller-supplied RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_fixtures::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::<44100, _>::with_rng(0.8, rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self { amplitude, rng }
    }

    /// Peak amplitude of the noise band.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Signal for WhiteNoise<SAMPLE_RATE, R> {
    fn next_sample(&mut self) -> f64 {
        uniform_band(&mut self.rng, self.amplitude)
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> AudioSignal<SAMPLE_RATE> for WhiteNoise<SAMPLE_RATE, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioSignalExt;

    #[test]
    fn test_creation() {
        let noise = WhiteNoise::<44100>::new(0.8);
        assert_eq!(noise.sample_rate(), 44100.0);
        assert_eq!(noise.amplitude(), 0.8);
    }

    #[test]
    fn test_sample_range() {
        let mut noise = WhiteNoise::<44100>::new(0.8);
        for _ in 0..10000 {
            let sample = noise.next_sample();
            assert!((-0.8..=0.8).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let mut noise = WhiteNoise::<44100>::new(0.8);
        let samples: Vec<f64> = (0..100).map(|_| noise.next_sample()).collect();
        let first = samples[0];
        let all_same = samples.iter().all(|&s| s == first);
        assert!(!all_same, "White noise should produce varying samples");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = WhiteNoise::<44100, _>::seeded(0.8, 42).render(0.1);
        let b = WhiteNoise::<44100, _>::seeded(0.8, 42).render(0.1);
        assert_eq!(a, b);

        let c = WhiteNoise::<44100, _>::seeded(0.8, 7).render(0.1);
        assert_ne!(a, c);
    }

    #[test]
    fn test_statistics() {
        let samples = WhiteNoise::<44100, _>::seeded(0.8, 1).render(2.0);
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        // Uniform on [-a, a] has variance a^2 / 3
        assert!(mean.abs() < 0.01, "mean was {mean}");
        assert!((variance - 0.64 / 3.0).abs() < 0.005, "variance was {variance}");
    }
}
