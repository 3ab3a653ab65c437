//! Logarithmic (exponential) sine sweep.

use super::Oscillator;
use crate::signals::time_at;
use crate::{AudioSignal, Signal};
use std::f64::consts::PI;

/// A sine sweep whose frequency rises geometrically from `start` to `end` Hz
/// over `duration` seconds.
///
/// The phase is the closed-form integral of the exponential frequency curve:
///
/// `φ(t) = 2π·f_lo·D / ln(f_hi/f_lo) · ((f_hi/f_lo)^(t/D) − 1)`
///
/// Accumulating a per-sample frequency increment instead would drift and
/// leave phase discontinuities.
///
/// # Examples
///
/// ```
/// use signal_fixtures::{AudioSignalExt, LogSweep, Oscillator};
///
/// let mut sweep = LogSweep::<44100>::new(20.0, 20000.0, 5.0, 0.8);
/// assert_eq!(sweep.frequency(), 20.0);
/// assert_eq!(sweep.render(5.0).len(), 220_500);
/// ```
#[derive(Debug, Clone)]
pub struct LogSweep<const SAMPLE_RATE: u32> {
    start: f64,
    end: f64,
    duration: f64,
    amplitude: f64,
    index: u64,
}

impl<const SAMPLE_RATE: u32> LogSweep<SAMPLE_RATE> {
    /// Creates a new logarithmic sweep.
    ///
    /// # Arguments
    ///
    /// * `start` - Frequency at t = 0 in Hz
    /// * `end` - Frequency at t = `duration` in Hz
    /// * `duration` - Sweep length in seconds
    /// * `amplitude` - Peak amplitude of the output
    pub fn new(start: f64, end: f64, duration: f64, amplitude: f64) -> Self {
        Self {
            start,
            end,
            duration,
            amplitude,
            index: 0,
        }
    }

    fn ratio(&self) -> f64 {
        self.end / self.start
    }

    /// Instantaneous frequency at time `t` seconds.
    pub fn frequency_at(&self, t: f64) -> f64 {
        self.start * self.ratio().powf(t / self.duration)
    }

    /// Phase in radians at time `t` seconds.
    ///
    /// A flat sweep (`start == end`) is a constant tone with phase `2π·f·t`.
    pub fn phase_at(&self, t: f64) -> f64 {
        let ratio = self.ratio();
        if ratio == 1.0 {
            return 2.0 * PI * self.start * t;
        }
        2.0 * PI * self.start * self.duration / ratio.ln() * (ratio.powf(t / self.duration) - 1.0)
    }

    /// Value of the sweep at time `t` seconds.
    pub fn value_at(&self, t: f64) -> f64 {
        self.phase_at(t).sin() * self.amplitude
    }
}

impl<const SAMPLE_RATE: u32> Signal for LogSweep<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = self.value_at(time_at(self.index, SAMPLE_RATE));
        self.index += 1;
        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for LogSweep<SAMPLE_RATE> {}

impl<const SAMPLE_RATE: u32> Oscillator for LogSweep<SAMPLE_RATE> {
    fn frequency(&self) -> f64 {
        self.frequency_at(time_at(self.index, SAMPLE_RATE))
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_frequencies() {
        let sweep = LogSweep::<44100>::new(20.0, 20000.0, 5.0, 0.8);
        assert!((sweep.frequency_at(0.0) - 20.0).abs() < 1e-9);
        assert!((sweep.frequency_at(5.0) - 20000.0).abs() < 1e-6);
        // Geometric midpoint
        assert!((sweep.frequency_at(2.5) - (20.0f64 * 20000.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_phase_starts_at_zero() {
        let sweep = LogSweep::<44100>::new(20.0, 20000.0, 5.0, 0.8);
        assert_eq!(sweep.phase_at(0.0), 0.0);
    }

    #[test]
    fn test_phase_derivative_matches_frequency() {
        let sweep = LogSweep::<44100>::new(20.0, 20000.0, 5.0, 0.8);
        let dt = 1e-6;
        for &t in &[0.0, 1.0, 2.5, 4.0] {
            let numeric = (sweep.phase_at(t + dt) - sweep.phase_at(t)) / dt / (2.0 * PI);
            let expected = sweep.frequency_at(t);
            assert!(
                (numeric - expected).abs() / expected < 1e-3,
                "t={t}: {numeric} vs {expected}"
            );
        }
    }

    #[test]
    fn test_frequency_tracks_position() {
        let mut sweep = LogSweep::<100>::new(1.0, 100.0, 2.0, 1.0);
        for _ in 0..100 {
            sweep.next_sample();
        }
        assert!((sweep.frequency() - 10.0).abs() < 1e-9);
        sweep.reset();
        assert!((sweep.frequency() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_range() {
        let mut sweep = LogSweep::<44100>::new(20.0, 20000.0, 1.0, 0.8);
        for _ in 0..44100 {
            let sample = sweep.next_sample();
            assert!(sample.abs() <= 0.8 + 1e-12);
        }
    }

    #[test]
    fn test_flat_sweep_is_a_pure_tone() {
        let mut sweep = LogSweep::<44100>::new(440.0, 440.0, 1.0, 0.8);
        let mut tone = crate::SineOscillator::<44100>::new(440.0, 0.8);
        for i in 0..44100 {
            let sample = sweep.next_sample();
            assert!(sample.is_finite(), "sample {i} is {sample}");
            assert!((sample - tone.next_sample()).abs() < 1e-9);
        }
        assert_eq!(sweep.frequency(), 440.0);
    }
}
