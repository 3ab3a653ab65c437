//! Major triad under an attack/decay/sustain/release envelope.

use crate::combinators::{Add, Gain, Multiply};
use crate::envelopes::BreakpointEnvelope;
use crate::{SignalExt, SineOscillator};

/// C4, E4 and G4 in Hz.
pub const MAJOR_TRIAD_C4: [f64; 3] = [261.63, 329.63, 392.0];

/// Signal graph produced by [`chord`]: `(a + b + c) · envelope · gain`.
pub type Chord<const SAMPLE_RATE: u32> = Gain<
    Multiply<
        Add<
            Add<SineOscillator<SAMPLE_RATE>, SineOscillator<SAMPLE_RATE>>,
            SineOscillator<SAMPLE_RATE>,
        >,
        BreakpointEnvelope<SAMPLE_RATE>,
    >,
>;

/// The 3-second chord envelope: 0.1 s attack to 1.0, 0.2 s decay to 0.7,
/// sustain until 2.5 s, 0.5 s release to silence.
pub fn chord_envelope<const SAMPLE_RATE: u32>() -> BreakpointEnvelope<SAMPLE_RATE> {
    BreakpointEnvelope::new(0.0)
        .ramp_to(0.1, 1.0)
        .ramp_to(0.3, 0.7)
        .hold_until(2.5)
        .ramp_to(3.0, 0.0)
}

/// Sums three unit sine tones, shapes them with `envelope` and scales by `gain`.
///
/// # Examples
///
/// ```
/// use signal_fixtures::{AudioSignalExt, voices};
///
/// let mut chord = voices::chord::<44100>(
///     voices::MAJOR_TRIAD_C4,
///     voices::chord_envelope(),
///     0.25,
/// );
/// let samples = chord.render(3.0);
/// assert_eq!(samples.len(), 132_300);
/// assert_eq!(samples[0], 0.0);
/// ```
pub fn chord<const SAMPLE_RATE: u32>(
    frequencies: [f64; 3],
    envelope: BreakpointEnvelope<SAMPLE_RATE>,
    gain: f64,
) -> Chord<SAMPLE_RATE> {
    let [root, third, fifth] = frequencies;
    SineOscillator::new(root, 1.0)
        .add(SineOscillator::new(third, 1.0))
        .add(SineOscillator::new(fifth, 1.0))
        .multiply(envelope)
        .gain(gain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioSignalExt;
    use crate::signals::time_at;
    use crate::wav::quantize;
    use std::f64::consts::PI;

    /// Attack/decay/sustain/release written as explicit per-stage slopes.
    fn staged_envelope(t: f64) -> f64 {
        let level = if t < 0.1 {
            t / 0.1
        } else if t < 0.3 {
            1.0 - 0.3 * (t - 0.1) / 0.2
        } else if t < 2.5 {
            0.7
        } else {
            0.7 * (1.0 - (t - 2.5) / 0.5)
        };
        level.max(0.0)
    }

    #[test]
    fn test_matches_closed_form() {
        let mut signal = chord::<44100>(MAJOR_TRIAD_C4, chord_envelope(), 0.25);
        let envelope = chord_envelope::<44100>();
        for (i, sample) in signal.render(0.5).into_iter().enumerate() {
            let t = time_at(i as u64, 44100);
            let tones: f64 = MAJOR_TRIAD_C4
                .iter()
                .map(|f| (2.0 * PI * f * t).sin())
                .sum();
            let expected = tones * envelope.level_at(t) * 0.25;
            assert!((sample - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tail_is_silent() {
        let samples = chord::<44100>(MAJOR_TRIAD_C4, chord_envelope(), 0.25).render(3.0);
        let tail_start = (2.999 * 44100.0) as usize;
        assert!(samples[tail_start..].iter().all(|s| s.abs() < 0.01));
    }

    #[test]
    fn test_peak_within_headroom() {
        let samples = chord::<44100>(MAJOR_TRIAD_C4, chord_envelope(), 0.25).render(3.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.75 + 1e-12));
    }

    #[test]
    fn test_quantized_output_matches_staged_envelope() {
        let samples = chord::<44100>(MAJOR_TRIAD_C4, chord_envelope(), 0.25).render(3.0);
        assert_eq!(samples.len(), 132300);
        for (i, sample) in samples.iter().enumerate() {
            let t = time_at(i as u64, 44100);
            let tones = (2.0 * PI * MAJOR_TRIAD_C4[0] * t).sin()
                + (2.0 * PI * MAJOR_TRIAD_C4[1] * t).sin()
                + (2.0 * PI * MAJOR_TRIAD_C4[2] * t).sin();
            let expected = tones * staged_envelope(t) * 0.25;
            assert_eq!(quantize(*sample), quantize(expected), "sample {i}");
        }
    }
}
