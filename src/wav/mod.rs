//! 16-bit PCM WAVE encoding.

mod pcm;
mod writer;

pub use pcm::{BITS_PER_SAMPLE, FULL_SCALE, dequantize, quantize, wav_spec};
pub use writer::{encode, write_asset};
