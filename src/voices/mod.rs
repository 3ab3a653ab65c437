//! Composite voice models built from harmonics, envelopes and noise.
//!
//! - [`HarmonicVoice`]: a fixed-pitch harmonic series with breath noise
//! - [`chord`]: a major triad under a breakpoint envelope
//! - [`SpeechLike`]: a pitch-contoured, formant-shaped, syllable-modulated voice

mod chord;
mod formant;
mod harmonic;
mod speech;

pub use chord::{Chord, MAJOR_TRIAD_C4, chord, chord_envelope};
pub use formant::Formant;
pub use harmonic::HarmonicVoice;
pub use speech::{SpeechLike, SpeechParams};
