//! Sample quantization and the container description.

use hound::{SampleFormat, WavSpec};

/// Bit depth of every encoded file.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Largest magnitude written. The range is symmetric, so -32768 never appears.
pub const FULL_SCALE: f64 = 32767.0;

/// Clamps `sample` to [-1, 1] and rounds it onto the 16-bit grid.
///
/// NaN maps to 0.
///
/// # Examples
///
/// ```
/// use signal_fixtures::wav::quantize;
///
/// assert_eq!(quantize(1.0), 32767);
/// assert_eq!(quantize(-3.0), -32767);
/// assert_eq!(quantize(0.5), 16384);
/// ```
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * FULL_SCALE).round() as i16
}

/// Inverse of [`quantize`], up to one quantization step.
pub fn dequantize(value: i16) -> f64 {
    value as f64 / FULL_SCALE
}

/// Container description for integer PCM at 16 bits.
pub fn wav_spec(channels: u16, sample_rate: u32) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}
