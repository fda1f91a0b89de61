// src/core/state.rs

use super::amplitude::AmplitudePair;
use super::distribution::Distribution;
use super::error::WalkError;
use crate::operations::coin::hadamard;
use crate::topology::Topology;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Anything usable as a position or node key of an [`AmplitudeState`].
pub trait StateKey: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> StateKey for T where T: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// The complete state of a walk at one moment: one [`AmplitudePair`] per key.
///
/// The key set is fixed at construction and keeps the topology's order, so
/// probabilities come back in a stable, reproducible sequence. After every
/// successful [`normalize`](AmplitudeState::normalize) the total probability
/// is 1 within floating-point tolerance; a raw shift gives no such guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeState<K: StateKey> {
    /// Keys in topology order.
    keys: Vec<K>,
    /// Maps each key to its slot in `keys` and `pairs`.
    indices: HashMap<K, usize>,
    pairs: Vec<AmplitudePair>,
}

impl<K: StateKey> AmplitudeState<K> {
    /// Creates an all-zero state over an explicit key list.
    ///
    /// # Returns
    /// * `Err(WalkError::InvalidTopology)` for an empty or duplicated key list.
    pub fn new(keys: Vec<K>) -> Result<Self, WalkError> {
        if keys.is_empty() {
            return Err(WalkError::InvalidTopology {
                message: "Cannot build an amplitude state over zero keys".to_string(),
            });
        }
        let mut indices = HashMap::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            if indices.insert(*key, index).is_some() {
                return Err(WalkError::InvalidTopology {
                    message: format!("Key {} appears more than once", key),
                });
            }
        }
        let pairs = vec![AmplitudePair::zero(); keys.len()];
        Ok(Self { keys, indices, pairs })
    }

    /// Creates an all-zero state over every node of a topology.
    pub fn over<T>(topology: &T) -> Self
    where
        T: Topology<Node = K>,
    {
        // Topologies reject empty and duplicated node sets on construction.
        let keys = topology.nodes();
        let indices = keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();
        let pairs = vec![AmplitudePair::zero(); keys.len()];
        Self { keys, indices, pairs }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.indices.contains_key(key)
    }

    /// Amplitude pair held at `key`, if the key belongs to this state.
    pub fn get(&self, key: &K) -> Option<&AmplitudePair> {
        self.indices.get(key).map(|&i| &self.pairs[i])
    }

    /// Overwrites the pair held at `key`.
    pub fn set(&mut self, key: K, pair: AmplitudePair) -> Result<(), WalkError> {
        let index = *self.indices.get(&key).ok_or_else(|| WalkError::KeyNotFound {
            key: key.to_string(),
        })?;
        self.pairs[index] = pair;
        Ok(())
    }

    /// Sets every key to the same pair.
    pub fn fill(&mut self, pair: AmplitudePair) {
        self.pairs.iter_mut().for_each(|p| *p = pair);
    }

    /// Pairs in key order.
    pub fn pairs(&self) -> &[AmplitudePair] {
        &self.pairs
    }

    pub(crate) fn pairs_mut(&mut self) -> &mut [AmplitudePair] {
        &mut self.pairs
    }

    /// Iterates `(key, pair)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &AmplitudePair)> + '_ {
        self.keys.iter().copied().zip(self.pairs.iter())
    }

    /// `|up|^2 + |down|^2` for each key. Defined for unnormalized states too.
    pub fn probabilities(&self) -> Distribution<K> {
        Distribution::from_parts(
            self.keys.clone(),
            self.pairs.iter().map(AmplitudePair::probability).collect(),
        )
    }

    /// Sum of all per-key probabilities.
    pub fn total_probability(&self) -> f64 {
        self.pairs.iter().map(AmplitudePair::probability).sum()
    }

    /// Rescales every pair so the total probability becomes 1.
    ///
    /// # Returns
    /// * `Err(WalkError::DegenerateState)` if the state carries no probability
    ///   at all (or the total is not finite); the state is left untouched.
    pub fn normalize(&mut self) -> Result<(), WalkError> {
        let total = self.total_probability();
        if !(total.is_finite() && total > 0.0) {
            return Err(WalkError::DegenerateState {
                message: format!("Cannot normalize a state with total probability {}", total),
            });
        }
        let constant = total.sqrt();
        for pair in self.pairs.iter_mut() {
            *pair = pair.unscale(constant);
        }
        Ok(())
    }

    /// Applies the Hadamard coin to every pair independently.
    pub fn coin_flip(&mut self) {
        for pair in self.pairs.iter_mut() {
            *pair = hadamard(*pair);
        }
    }

    /// Takes over the amplitudes of `next`, which must share this state's keys.
    pub(crate) fn replace_with(&mut self, next: AmplitudeState<K>) -> Result<(), WalkError> {
        if next.keys != self.keys {
            return Err(WalkError::TopologyMismatch {
                message: "Replacement state is defined over different keys".to_string(),
            });
        }
        self.pairs = next.pairs;
        Ok(())
    }
}

impl<K: StateKey> fmt::Display for AmplitudeState<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, (key, pair)) in self.iter().enumerate() {
            write!(f, "{}{}: {}", if i > 0 { ", " } else { "" }, key, pair)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn three_keys() -> AmplitudeState<i64> {
        AmplitudeState::new(vec![-1, 0, 1]).expect("valid keys")
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert!(matches!(
            AmplitudeState::<i64>::new(vec![]),
            Err(WalkError::InvalidTopology { .. })
        ));
        assert!(matches!(
            AmplitudeState::new(vec![1i64, 2, 1]),
            Err(WalkError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_starts_at_zero() {
        let state = three_keys();
        assert_eq!(state.total_probability(), 0.0);
        assert!(state.pairs().iter().all(AmplitudePair::is_zero));
    }

    #[test]
    fn test_set_unknown_key() {
        let mut state = three_keys();
        let err = state.set(7, AmplitudePair::balanced()).unwrap_err();
        assert_eq!(err, WalkError::KeyNotFound { key: "7".to_string() });
    }

    #[test]
    fn test_normalize_zero_state_fails() {
        let mut state = three_keys();
        assert!(matches!(state.normalize(), Err(WalkError::DegenerateState { .. })));
    }

    #[test]
    fn test_normalize_sums_to_one() -> Result<(), WalkError> {
        let mut state = three_keys();
        state.set(-1, AmplitudePair::balanced())?;
        state.set(1, AmplitudePair::new(Complex::new(3.0, 0.0), Complex::new(0.0, 0.0)))?;
        assert!((state.total_probability() - 11.0).abs() < TEST_TOLERANCE);

        state.normalize()?;
        assert!((state.total_probability() - 1.0).abs() < TEST_TOLERANCE);
        let probs = state.probabilities();
        assert!((probs.get(&-1).unwrap_or_default() - 2.0 / 11.0).abs() < TEST_TOLERANCE);
        assert!((probs.get(&1).unwrap_or_default() - 9.0 / 11.0).abs() < TEST_TOLERANCE);

        // A second pass leaves a normalized state unchanged.
        let before = state.clone();
        state.normalize()?;
        for (a, b) in state.pairs().iter().zip(before.pairs()) {
            assert!((a.up - b.up).norm() < TEST_TOLERANCE);
            assert!((a.down - b.down).norm() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_coin_flip_is_per_key() -> Result<(), WalkError> {
        let mut state = three_keys();
        state.set(0, AmplitudePair::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)))?;
        state.coin_flip();
        let centre = state.get(&0).copied().unwrap_or_default();
        assert!((centre.up.re - std::f64::consts::FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
        assert!((centre.down.re - std::f64::consts::FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
        assert!(state.get(&-1).is_some_and(AmplitudePair::is_zero));
        assert!(state.get(&1).is_some_and(AmplitudePair::is_zero));
        Ok(())
    }

    #[test]
    fn test_replace_with_mismatched_keys() {
        let mut state = three_keys();
        let other = AmplitudeState::new(vec![0i64, 1, 2]).expect("valid keys");
        assert!(matches!(state.replace_with(other), Err(WalkError::TopologyMismatch { .. })));
    }
}
