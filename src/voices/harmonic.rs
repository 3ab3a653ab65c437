//! Harmonic series voice with breath noise.

use crate::noise::uniform_band;
use crate::oscillators::Oscillator;
use crate::signals::time_at;
use crate::{AudioSignal, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// A crude voice: the fundamental plus overtones with `1/h` falloff.
///
/// Each sample is
/// `gain · (Σ_{h=1..H} (1/h)·sin(2π·f0·h·t) + U(−breath, breath))`.
/// The harmonic sum peaks well above 1.0, so `gain` must bring it back into
/// range.
pub struct HarmonicVoice<const SAMPLE_RATE: u32, R: Rng = StdRng> {
    fundamental: f64,
    harmonics: u32,
    breath: f64,
    gain: f64,
    rng: R,
    index: u64,
}

impl<const SAMPLE_RATE: u32> HarmonicVoice<SAMPLE_RATE, StdRng> {
    /// Creates a reproducible voice whose breath noise is seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_fixtures::{AudioSignalExt, HarmonicVoice};
    ///
    /// let a = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 42).render(0.5);
    /// let b = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 42).render(0.5);
    /// assert_eq!(a, b);
    /// ```
    pub fn seeded(fundamental: f64, harmonics: u32, breath: f64, gain: f64, seed: u64) -> Self {
        Self::with_rng(
            fundamental,
            harmonics,
            breath,
            gain,
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> HarmonicVoice<SAMPLE_RATE, R> {
    /// Creates a voice drawing breath noise from `rng`.
    ///
    /// # Arguments
    ///
    /// * `fundamental` - Pitch of the first harmonic in Hz
    /// * `harmonics` - Number of harmonics including the fundamental
    /// * `breath` - Half-width of the uniform noise band
    /// * `gain` - Output scale applied after summation
    /// * `rng` - Random source for the breath noise
    pub fn with_rng(fundamental: f64, harmonics: u32, breath: f64, gain: f64, rng: R) -> Self {
        Self {
            fundamental,
            harmonics,
            breath,
            gain,
            rng,
            index: 0,
        }
    }

    /// Deterministic part of the voice at time `t` (no noise, no gain).
    pub fn harmonic_sum(&self, t: f64) -> f64 {
        (1..=self.harmonics)
            .map(|h| {
                let h = h as f64;
                (1.0 / h) * (2.0 * PI * (self.fundamental * h) * t).sin()
            })
            .sum()
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Signal for HarmonicVoice<SAMPLE_RATE, R> {
    fn next_sample(&mut self) -> f64 {
        let t = time_at(self.index, SAMPLE_RATE);
        self.index += 1;
        let voiced = self.harmonic_sum(t) + uniform_band(&mut self.rng, self.breath);
        voiced * self.gain
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> AudioSignal<SAMPLE_RATE> for HarmonicVoice<SAMPLE_RATE, R> {}

impl<const SAMPLE_RATE: u32, R: Rng> Oscillator for HarmonicVoice<SAMPLE_RATE, R> {
    fn frequency(&self) -> f64 {
        self.fundamental
    }

    /// Rewinds time only; the random source keeps its position.
    fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioSignalExt;

    #[test]
    fn test_length() {
        let mut voice = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 42);
        assert_eq!(voice.render(3.0).len(), 132_300);
    }

    #[test]
    fn test_harmonic_sum_without_noise() {
        let voice = HarmonicVoice::<44100>::seeded(1.0, 2, 0.0, 1.0, 0);
        // sin(π/2) + 0.5·sin(π) at t = 0.25
        assert!((voice.harmonic_sum(0.25) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_breath_noise_bounded() {
        let mut voice = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 3);
        let samples = voice.render(0.2);
        for (i, &s) in samples.iter().enumerate() {
            let clean = voice.harmonic_sum(time_at(i as u64, 44100)) * 0.15;
            assert!((s - clean).abs() <= 0.05 * 0.15 + 1e-12);
        }
    }

    #[test]
    fn test_stays_in_range() {
        // Peak of Σ 1/h for h ≤ 7 is below 2.6, so 0.15 keeps output well inside [-1, 1]
        let samples = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 42).render(1.0);
        assert!(samples.iter().all(|s| s.abs() < 0.5));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 1).render(0.01);
        let b = HarmonicVoice::<44100>::seeded(150.0, 7, 0.05, 0.15, 2).render(0.01);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_harmonics_is_noise_only() {
        let samples = HarmonicVoice::<44100>::seeded(150.0, 0, 0.05, 1.0, 9).render(0.1);
        assert!(samples.iter().all(|s| s.abs() <= 0.05));
    }
}
