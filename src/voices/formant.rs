//! Gaussian formant resonance.

/// A resonance band emphasizing harmonics near `center`.
///
/// The boost applied to a harmonic at frequency `f` is
/// `gain · exp(−(f − center)² / bandwidth²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formant {
    pub center: f64,
    pub bandwidth: f64,
    pub gain: f64,
}

impl Formant {
    pub const fn new(center: f64, bandwidth: f64, gain: f64) -> Self {
        Self {
            center,
            bandwidth,
            gain,
        }
    }

    /// Boost contributed at `frequency` Hz.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_fixtures::voices::Formant;
    ///
    /// let f1 = Formant::new(500.0, 200.0, 0.5);
    /// assert_eq!(f1.boost(500.0), 0.5);
    /// assert!(f1.boost(2000.0) < 1e-10);
    /// ```
    pub fn boost(&self, frequency: f64) -> f64 {
        self.gain * (-(frequency - self.center).powi(2) / self.bandwidth.powi(2)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric() {
        let f = Formant::new(1500.0, 200.0, 0.5);
        assert!((f.boost(1400.0) - f.boost(1600.0)).abs() < 1e-15);
    }

    #[test]
    fn test_one_bandwidth_away() {
        let f = Formant::new(1500.0, 200.0, 0.5);
        assert!((f.boost(1700.0) - 0.5 * (-1.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_far_frequencies_underflow_to_zero() {
        let f = Formant::new(500.0, 200.0, 0.5);
        let far = f.boost(1.0e6);
        assert_eq!(far, 0.0);
        assert!(far.is_finite());
    }
}
