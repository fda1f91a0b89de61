// src/operations/coin.rs

use crate::core::AmplitudePair;
use std::f64::consts::FRAC_1_SQRT_2;

/// Applies the Hadamard coin `2^(-1/2) * [[1, 1], [1, -1]]` to a pair taken
/// as the column vector `(up, down)`.
///
/// Sending a pure up or pure down pair through the coin yields equal
/// weight on both components, the quantum analogue of a fair coin toss.
/// The matrix is its own inverse.
pub fn hadamard(pair: AmplitudePair) -> AmplitudePair {
    AmplitudePair {
        up: (pair.up + pair.down) * FRAC_1_SQRT_2,
        down: (pair.up - pair.down) * FRAC_1_SQRT_2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn assert_pair_approx_eq(actual: AmplitudePair, expected: AmplitudePair, context: &str) {
        let dist = (actual.up - expected.up).norm_sqr() + (actual.down - expected.down).norm_sqr();
        assert!(
            dist < TEST_TOLERANCE * TEST_TOLERANCE,
            "Pair mismatch - Actual: {}, Expected: {}, Context: {}",
            actual, expected, context
        );
    }

    #[test]
    fn test_hadamard_of_up() {
        let up = AmplitudePair::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0));
        let expected = AmplitudePair::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0));
        assert_pair_approx_eq(hadamard(up), expected, "H|up>");
    }

    #[test]
    fn test_hadamard_of_down() {
        let down = AmplitudePair::new(Complex::new(0.0, 0.0), Complex::new(1.0, 0.0));
        let expected = AmplitudePair::new(Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0));
        assert_pair_approx_eq(hadamard(down), expected, "H|down>");
    }

    #[test]
    fn test_hadamard_is_involution() {
        let up = AmplitudePair::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0));
        assert_pair_approx_eq(hadamard(hadamard(up)), up, "HH|up>");

        let seeded = AmplitudePair::balanced();
        assert_pair_approx_eq(hadamard(hadamard(seeded)), seeded, "HH(1, i)");
    }

    #[test]
    fn test_hadamard_preserves_probability_and_phase() {
        let seeded = AmplitudePair::balanced();
        let flipped = hadamard(seeded);
        assert!((flipped.probability() - seeded.probability()).abs() < TEST_TOLERANCE);
        // (1 + i)/sqrt(2) and (1 - i)/sqrt(2)
        assert_pair_approx_eq(
            flipped,
            AmplitudePair::new(
                Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
                Complex::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            ),
            "H(1, i)",
        );
    }
}
