// src/core/amplitude.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// The "up" and "down" amplitudes held at one lattice position or graph node.
///
/// The pair is not restricted to unit norm: a raw shift leaves it
/// unnormalized until the owning state is normalized as a whole.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudePair {
    /// Amplitude of the "up" component.
    pub up: Complex<f64>,
    /// Amplitude of the "down" component.
    pub down: Complex<f64>,
}

impl AmplitudePair {
    /// Creates a pair from its two components.
    pub fn new(up: Complex<f64>, down: Complex<f64>) -> Self {
        Self { up, down }
    }

    /// The all-zero pair every key starts with.
    pub fn zero() -> Self {
        Self { up: Complex::zero(), down: Complex::zero() }
    }

    /// The `(1, i)` seed: equal weight on both components, down rotated by a quarter phase.
    pub fn balanced() -> Self {
        Self { up: Complex::new(1.0, 0.0), down: Complex::new(0.0, 1.0) }
    }

    /// `|up|^2 + |down|^2`.
    pub fn probability(&self) -> f64 {
        self.up.norm_sqr() + self.down.norm_sqr()
    }

    /// Divides both components by a real constant.
    pub fn unscale(&self, divisor: f64) -> Self {
        Self { up: self.up / divisor, down: self.down / divisor }
    }

    pub fn is_zero(&self) -> bool {
        self.up.is_zero() && self.down.is_zero()
    }
}

impl Default for AmplitudePair {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<(Complex<f64>, Complex<f64>)> for AmplitudePair {
    fn from((up, down): (Complex<f64>, Complex<f64>)) -> Self {
        Self { up, down }
    }
}

impl fmt::Display for AmplitudePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.up, self.down)
    }
}
