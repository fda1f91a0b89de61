// src/validation/mod.rs

//! Numeric checks on amplitude states and probability distributions.

use crate::core::{AmplitudeState, Distribution, StateKey, WalkError};
use crate::core::constants::walk_constants::{DEFAULT_ATOL, DEFAULT_RTOL};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state's total probability is 1 within tolerance.
///
/// # Arguments
/// * `state` - The `AmplitudeState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(WalkError::Unnormalized)` otherwise.
pub fn check_normalization<K: StateKey>(state: &AmplitudeState<K>, tolerance: Option<f64>) -> Result<(), WalkError> {
    check_total(state.total_probability(), tolerance)
}

/// Checks that a distribution is a probability distribution: no negative
/// or non-finite weights, total 1 within tolerance.
pub fn check_distribution<K: StateKey>(distribution: &Distribution<K>, tolerance: Option<f64>) -> Result<(), WalkError> {
    if let Some((key, value)) = distribution.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
        return Err(WalkError::InvalidDistribution {
            message: format!("Weight of {} is {}, not a probability", key, value),
        });
    }
    check_total(distribution.total(), tolerance)
}

fn check_total(total: f64, tolerance: Option<f64>) -> Result<(), WalkError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    if (total - 1.0).abs() > effective_tolerance {
        Err(WalkError::Unnormalized { total, tolerance: effective_tolerance })
    } else {
        Ok(())
    }
}

/// Elementwise closeness of two distributions over the same keys:
/// `|a - b| <= atol + rtol * |b|` for every key.
///
/// Distributions over different key sets are never close.
///
/// # Arguments
/// * `rtol` - Relative tolerance, defaults to 1e-5.
/// * `atol` - Absolute tolerance, defaults to 1e-8.
pub fn distributions_close<K: StateKey>(
    a: &Distribution<K>,
    b: &Distribution<K>,
    rtol: Option<f64>,
    atol: Option<f64>,
) -> bool {
    let rtol = rtol.unwrap_or(DEFAULT_RTOL);
    let atol = atol.unwrap_or(DEFAULT_ATOL);
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, va)| match b.get(&key) {
        Some(vb) => (va - vb).abs() <= atol + rtol * vb.abs(),
        None => false,
    })
}

/// Sum of absolute differences between two distributions over the same keys.
///
/// # Returns
/// * `Err(WalkError::KeyNotFound)` if a key of `a` is missing from `b`.
/// * `Err(WalkError::TopologyMismatch)` if the key sets differ in size.
pub fn l1_distance<K: StateKey>(a: &Distribution<K>, b: &Distribution<K>) -> Result<f64, WalkError> {
    if a.len() != b.len() {
        return Err(WalkError::TopologyMismatch {
            message: format!("Cannot compare distributions of {} and {} keys", a.len(), b.len()),
        });
    }
    a.iter().try_fold(0.0, |acc, (key, va)| {
        let vb = b.get(&key).ok_or_else(|| WalkError::KeyNotFound { key: key.to_string() })?;
        Ok(acc + (va - vb).abs())
    })
}
