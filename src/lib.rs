//! Deterministic audio test signals rendered to 16-bit PCM WAV fixtures.
//!
//! Generators are [`Signal`]s bound to a sample rate through the
//! [`AudioSignal`] const parameter. [`AudioSignalExt::render`] turns one into
//! a finite sample sequence, [`AudioAsset`] attaches the metadata, and
//! [`wav::write_asset`] quantizes and writes it. The [`catalog`] module holds
//! the fixed fixture battery and the batch loop.

pub mod asset;
pub mod catalog;
pub mod combinators;
pub mod envelopes;
pub mod error;
pub mod noise;
pub mod oscillators;
pub mod signals;
pub mod voices;
pub mod wav;

// Re-export commonly used types at the crate root
pub use asset::AudioAsset;
pub use catalog::{CATALOG, FixtureSpec, GeneratorConfig, WrittenFixture, generate_all};
pub use combinators::{Add, Gain, Multiply, SignalExt};
pub use envelopes::BreakpointEnvelope;
pub use error::{Error, Result};
pub use noise::WhiteNoise;
pub use oscillators::{LogSweep, MultiToneOscillator, Oscillator, SineOscillator};
pub use signals::{AudioSignal, AudioSignalExt, ConstantSignal, Signal, frame_count};
pub use voices::{Formant, HarmonicVoice, SpeechLike};
