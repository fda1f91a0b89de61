// src/pagerank/config.rs

use crate::core::WalkError;
use crate::core::constants::walk_constants::{
    DEFAULT_ATOL, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_STEPS, DEFAULT_POWER_TOLERANCE,
    DEFAULT_RTOL,
};

/// When the quantum stagnation loop stops.
///
/// Two consecutive probability mappings count as stagnant when
/// `|previous - current| <= atol + rtol * |current|` for every node.
/// `max_steps` bounds the loop; exhausting it is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceConfig {
    pub rtol: f64,
    pub atol: f64,
    pub max_steps: u64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self { rtol: DEFAULT_RTOL, atol: DEFAULT_ATOL, max_steps: DEFAULT_MAX_STEPS }
    }
}

impl ConvergenceConfig {
    pub fn with_rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Rejects negative or non-finite tolerances and a zero step cap.
    pub fn validate(&self) -> Result<(), WalkError> {
        check_tolerance("rtol", self.rtol)?;
        check_tolerance("atol", self.atol)?;
        if self.max_steps == 0 {
            return Err(WalkError::InvalidParameter {
                message: "max_steps must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Parameters of the exact power-iteration PageRank.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactConfig {
    /// Damping factor: probability of following an out-edge.
    pub alpha: f64,
    pub max_iterations: usize,
    /// Per-node tolerance; iteration stops once the L1 change drops below `N * tolerance`.
    pub tolerance: f64,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_POWER_TOLERANCE,
        }
    }
}

impl ExactConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<(), WalkError> {
        check_damping(self.alpha)?;
        check_tolerance("tolerance", self.tolerance)?;
        if self.max_iterations == 0 {
            return Err(WalkError::InvalidParameter {
                message: "max_iterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Damping factors must lie in `[0, 1]`.
pub(crate) fn check_damping(alpha: f64) -> Result<(), WalkError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(WalkError::InvalidParameter {
            message: format!("Damping factor {} is outside [0, 1]", alpha),
        })
    }
}

fn check_tolerance(name: &str, value: f64) -> Result<(), WalkError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WalkError::InvalidParameter {
            message: format!("{} must be a finite, non-negative number (got {})", name, value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ConvergenceConfig::default().validate().is_ok());
        assert!(ExactConfig::default().validate().is_ok());
        assert_eq!(ExactConfig::default().alpha, 0.85);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ConvergenceConfig::default().with_max_steps(0).validate().is_err());
        assert!(ConvergenceConfig::default().with_rtol(f64::NAN).validate().is_err());
        assert!(ExactConfig::default().with_alpha(1.5).validate().is_err());
        assert!(ExactConfig::default().with_tolerance(-1.0).validate().is_err());
        assert!(check_damping(0.0).is_ok() && check_damping(1.0).is_ok());
    }
}
