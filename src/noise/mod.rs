//! Noise generators.

mod white;

pub(crate) use white::uniform_band;
pub use white::WhiteNoise;
