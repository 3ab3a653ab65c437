//! Formant-shaped, pitch-contoured speech-like voice.

use super::Formant;
use crate::noise::uniform_band;
use crate::oscillators::Oscillator;
use crate::signals::time_at;
use crate::{AudioSignal, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Tuning of the speech-like model.
///
/// The defaults are the fixture values and must stay bit-for-bit stable.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechParams {
    /// Center pitch in Hz
    pub base_pitch: f64,
    /// Depth (Hz) and rate (Hz) of the slow intonation contour
    pub contour_depth: f64,
    pub contour_rate: f64,
    /// Depth (Hz) and rate (Hz) of the vibrato
    pub vibrato_depth: f64,
    pub vibrato_rate: f64,
    /// Number of harmonics including the fundamental
    pub harmonics: u32,
    /// Harmonic `h` is weighted by `1 / h^rolloff`
    pub rolloff: f64,
    pub formants: Vec<Formant>,
    /// Rate of the syllabic amplitude modulation in Hz
    pub syllable_rate: f64,
    /// Scale applied to the modulated harmonic sum
    pub gain: f64,
    /// Half-width of the uniform breath noise band
    pub breath: f64,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            base_pitch: 150.0,
            contour_depth: 50.0,
            contour_rate: 0.5,
            vibrato_depth: 3.0,
            vibrato_rate: 5.5,
            harmonics: 9,
            rolloff: 1.2,
            formants: vec![
                Formant::new(500.0, 200.0, 0.5),
                Formant::new(1500.0, 200.0, 0.5),
                Formant::new(2500.0, 200.0, 0.5),
            ],
            syllable_rate: 4.0,
            gain: 0.1,
            breath: 0.03,
        }
    }
}

/// A synthetic voice that moves like speech without saying anything.
///
/// At time `t`:
/// - pitch `f0 = base + depth·sin(2π·contour·t) + vibrato·sin(2π·rate·t)`
/// - harmonic `h` contributes
///   `h^−rolloff · (1 + Σ formant boosts at f0·h) · sin(2π·f0·h·t)`
/// - the sum is multiplied by `0.5 + 0.5·sin(2π·syllable_rate·t)` and `gain`
/// - uniform breath noise is added last
///
/// # Examples
///
/// ```
/// use signal_fixtures::{AudioSignalExt, SpeechLike};
///
/// let mut speech = SpeechLike::<44100>::seeded(42);
/// assert_eq!(speech.render(5.0).len(), 220_500);
/// ```
pub struct SpeechLike<const SAMPLE_RATE: u32, R: Rng = StdRng> {
    params: SpeechParams,
    rng: R,
    index: u64,
}

impl<const SAMPLE_RATE: u32> SpeechLike<SAMPLE_RATE, StdRng> {
    /// Creates the default model with breath noise seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SpeechParams::default(), StdRng::seed_from_u64(seed))
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> SpeechLike<SAMPLE_RATE, R> {
    pub fn with_rng(params: SpeechParams, rng: R) -> Self {
        Self {
            params,
            rng,
            index: 0,
        }
    }

    pub fn params(&self) -> &SpeechParams {
        &self.params
    }

    /// Instantaneous pitch at time `t` seconds.
    pub fn pitch_at(&self, t: f64) -> f64 {
        let p = &self.params;
        let mut f0 = p.base_pitch + p.contour_depth * (2.0 * PI * p.contour_rate * t).sin();
        f0 += p.vibrato_depth * (2.0 * PI * p.vibrato_rate * t).sin();
        f0
    }

    /// Total formant boost for a harmonic at `frequency` Hz.
    pub fn formant_boost(&self, frequency: f64) -> f64 {
        let mut boost = 0.0;
        for formant in &self.params.formants {
            boost += formant.boost(frequency);
        }
        boost
    }

    /// Syllabic amplitude envelope at time `t`, in [0, 1].
    pub fn syllable_envelope(&self, t: f64) -> f64 {
        0.5 + 0.5 * (2.0 * PI * self.params.syllable_rate * t).sin()
    }

    /// Noise-free output at time `t`.
    pub fn voiced_at(&self, t: f64) -> f64 {
        let f0 = self.pitch_at(t);
        let mut sum = 0.0;
        for h in 1..=self.params.harmonics {
            let h = h as f64;
            let amp = 1.0 / h.powf(self.params.rolloff);
            let boost = self.formant_boost(f0 * h);
            sum += amp * (1.0 + boost) * (2.0 * PI * (f0 * h) * t).sin();
        }
        sum * self.syllable_envelope(t) * self.params.gain
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Signal for SpeechLike<SAMPLE_RATE, R> {
    fn next_sample(&mut self) -> f64 {
        let t = time_at(self.index, SAMPLE_RATE);
        self.index += 1;
        let voiced = self.voiced_at(t);
        voiced + uniform_band(&mut self.rng, self.params.breath)
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> AudioSignal<SAMPLE_RATE> for SpeechLike<SAMPLE_RATE, R> {}

impl<const SAMPLE_RATE: u32, R: Rng> Oscillator for SpeechLike<SAMPLE_RATE, R> {
    fn frequency(&self) -> f64 {
        self.pitch_at(time_at(self.index, SAMPLE_RATE))
    }

    /// Rewinds time only; the random source keeps its position.
    fn reset(&mut self) {
        self.index = 0;
    }
}
