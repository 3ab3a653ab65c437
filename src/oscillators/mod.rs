//! Deterministic oscillators.
//!
//! Every oscillator computes its output from the sample index in closed form
//! (`t = n / SAMPLE_RATE`) rather than by accumulating a phase increment, so
//! long renders do not drift.

mod multi;
mod sine;
mod sweep;
mod traits;

pub use multi::MultiToneOscillator;
pub use sine::SineOscillator;
pub use sweep::LogSweep;
pub use traits::Oscillator;
