//! Sample-rate-aware signals and finite rendering.

use crate::Signal;

/// Number of frames covering `duration` seconds at `sample_rate`.
///
/// Computed as `round(duration * sample_rate)`. Zero or negative durations
/// yield zero frames.
///
/// # Examples
///
/// ```
/// use signal_fixtures::frame_count;
///
/// assert_eq!(frame_count(1.0, 44100), 44100);
/// assert_eq!(frame_count(0.0, 44100), 0);
/// assert_eq!(frame_count(0.5, 3), 2);
/// ```
pub fn frame_count(duration: f64, sample_rate: u32) -> usize {
    let frames = (duration * sample_rate as f64).round();
    if frames > 0.0 { frames as usize } else { 0 }
}

/// Time in seconds of frame `index` at `sample_rate`.
#[inline]
pub fn time_at(index: u64, sample_rate: u32) -> f64 {
    index as f64 / sample_rate as f64
}

/// Common interface for anything that can be rendered as audio.
///
/// This trait extends `Signal` to add the sample rate at the type level. The
/// sample rate is a const generic parameter, so signals with different rates
/// cannot be mixed by accident.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use signal_fixtures::{AudioSignal, SineOscillator};
///
/// let osc: SineOscillator<44100> = SineOscillator::new(440.0, 0.8);
/// assert_eq!(osc.sample_rate(), 44100.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Gets the sample rate at which this audio is being generated.
    ///
    /// # Returns
    ///
    /// Sample rate in Hz (e.g., 44100.0 for CD quality)
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}

/// Extension trait turning an endless audio signal into a finite sequence.
///
/// Automatically implemented for every `AudioSignal`.
pub trait AudioSignalExt<const SAMPLE_RATE: u32>: AudioSignal<SAMPLE_RATE> {
    /// Renders `duration` seconds of this signal.
    ///
    /// The result holds exactly `frame_count(duration, SAMPLE_RATE)` samples.
    fn render(&mut self, duration: f64) -> Vec<f64> {
        self.render_frames(frame_count(duration, SAMPLE_RATE))
    }

    /// Renders exactly `frames` samples of this signal.
    fn render_frames(&mut self, frames: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; frames];
        self.process(&mut buffer);
        buffer
    }
}

impl<T: AudioSignal<SAMPLE_RATE> + ?Sized, const SAMPLE_RATE: u32> AudioSignalExt<SAMPLE_RATE>
    for T
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantSignal;

    #[test]
    fn test_frame_count_rounds() {
        assert_eq!(frame_count(5.0, 44100), 220_500);
        assert_eq!(frame_count(1.0 / 3.0, 10), 3);
        assert_eq!(frame_count(0.26, 10), 3);
        assert_eq!(frame_count(0.24, 10), 2);
    }

    #[test]
    fn test_frame_count_non_positive_duration() {
        assert_eq!(frame_count(0.0, 44100), 0);
        assert_eq!(frame_count(-1.0, 44100), 0);
    }

    #[test]
    fn test_time_at() {
        assert_eq!(time_at(0, 44100), 0.0);
        assert_eq!(time_at(22050, 44100), 0.5);
    }

    #[test]
    fn test_render_length() {
        let mut constant = ConstantSignal::<48000>(0.25);
        let samples = constant.render(0.5);
        assert_eq!(samples.len(), 24000);
        assert!(samples.iter().all(|&s| s == 0.25));
    }

    #[test]
    fn test_render_zero_duration_is_empty() {
        let mut constant = ConstantSignal::<44100>(1.0);
        assert!(constant.render(0.0).is_empty());
    }
}
