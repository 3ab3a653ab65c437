//! Signal combinators for composing generators.
//!
//! Sample-by-sample addition, multiplication and fixed gain. Evaluation order
//! is left to right, so `a.add(b).add(c)` computes `(a + b) + c`.

use crate::{AudioSignal, Signal};

/// Multiplies two signals together (amplitude modulation).
///
/// When one signal is an envelope this shapes the loudness of the other.
///
/// # Examples
///
/// ```
/// use signal_fixtures::{Signal, SineOscillator, combinators::Multiply};
///
/// let carrier = SineOscillator::<44100>::new(440.0, 1.0);
/// let modulator = SineOscillator::<44100>::new(2.0, 1.0);
/// let mut am = Multiply::new(carrier, modulator);
/// assert_eq!(am.next_sample(), 0.0);
/// ```
pub struct Multiply<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Multiply<A, B> {
    /// Creates a new Multiply combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Multiply<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() * self.b.next_sample()
    }
}

impl<const SAMPLE_RATE: u32, A: AudioSignal<SAMPLE_RATE>, B: AudioSignal<SAMPLE_RATE>>
    AudioSignal<SAMPLE_RATE> for Multiply<A, B>
{
}

/// Adds two signals together (mixing).
///
/// No headroom is applied; follow with a [`Gain`] when summing several
/// full-scale signals.
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() + self.b.next_sample()
    }
}

impl<const SAMPLE_RATE: u32, A: AudioSignal<SAMPLE_RATE>, B: AudioSignal<SAMPLE_RATE>>
    AudioSignal<SAMPLE_RATE> for Add<A, B>
{
}

/// Scales a signal by a fixed factor.
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: f64,
}

impl<S: Signal> Signal for Gain<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.gain
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Gain<S> {}

/// Extension trait for fluent signal composition.
///
/// # Examples
///
/// ```
/// use signal_fixtures::{ConstantSignal, Signal, SignalExt};
///
/// let mut mixed = ConstantSignal::<44100>(0.5)
///     .add(ConstantSignal::<44100>(0.25))
///     .gain(2.0);
/// assert_eq!(mixed.next_sample(), 1.5);
/// ```
pub trait SignalExt: Signal + Sized {
    /// Multiplies this signal with another signal.
    fn multiply<S: Signal>(self, other: S) -> Multiply<Self, S> {
        Multiply { a: self, b: other }
    }

    /// Adds this signal to another signal.
    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add { a: self, b: other }
    }

    /// Applies a gain factor to this signal.
    fn gain(self, gain: f64) -> Gain<Self> {
        Gain { source: self, gain }
    }
}

impl<T: Signal> SignalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantSignal;

    #[test]
    fn test_multiply() {
        let a = ConstantSignal::<44100>(2.0);
        let b = ConstantSignal::<44100>(3.0);
        let mut mult = Multiply { a, b };
        assert_eq!(mult.next_sample(), 6.0);
    }

    #[test]
    fn test_add() {
        let a = ConstantSignal::<44100>(2.0);
        let b = ConstantSignal::<44100>(3.0);
        let mut add = Add { a, b };
        assert_eq!(add.next_sample(), 5.0);
    }

    #[test]
    fn test_gain() {
        let source = ConstantSignal::<44100>(2.0);
        let mut gain = Gain { source, gain: 0.5 };
        assert_eq!(gain.next_sample(), 1.0);
    }

    #[test]
    fn test_chained_order() {
        let mut chain = ConstantSignal::<44100>(1.0)
            .add(ConstantSignal::<44100>(2.0))
            .multiply(ConstantSignal::<44100>(3.0))
            .gain(0.5);
        assert_eq!(chain.next_sample(), 4.5);
    }
}
