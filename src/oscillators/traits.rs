//! Core trait definitions for oscillators.

/// Common interface for all oscillators.
pub trait Oscillator {
    /// Gets the frequency the oscillator is producing at its current position.
    ///
    /// For fixed-pitch oscillators this is constant. For sweeps and modulated
    /// voices it is the instantaneous frequency at the next sample.
    ///
    /// # Returns
    ///
    /// Frequency in Hz
    fn frequency(&self) -> f64;

    /// Rewinds the oscillator to t = 0.
    fn reset(&mut self);
}
