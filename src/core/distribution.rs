// src/core/distribution.rs
use super::state::StateKey;
use std::collections::HashMap;
use std::fmt;

/// A mapping from node or lattice position to a non-negative real weight.
///
/// Every estimator hands its answer back in this shape. Entries keep the
/// order of the topology they were produced from.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<K: StateKey> {
    keys: Vec<K>,
    values: Vec<f64>,
    indices: HashMap<K, usize>,
}

impl<K: StateKey> Distribution<K> {
    /// Pairs up keys with values. (Internal visibility)
    pub(crate) fn from_parts(keys: Vec<K>, values: Vec<f64>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        let indices = keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();
        Self { keys, values, indices }
    }

    /// A distribution with every weight set to zero.
    pub fn zeros(keys: &[K]) -> Self {
        Self::from_parts(keys.to_vec(), vec![0.0; keys.len()])
    }

    /// Weight of `key`, or `None` if the key is not part of the mapping.
    pub fn get(&self, key: &K) -> Option<f64> {
        self.indices.get(key).map(|&i| self.values[i])
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates `(key, weight)` in topology order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Key with the largest weight. Ties go to the earliest key.
    pub fn argmax(&self) -> Option<K> {
        let mut best: Option<(K, f64)> = None;
        for (key, value) in self.iter() {
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((key, value)),
            }
        }
        best.map(|(key, _)| key)
    }

    /// Copies the weights into a plain map.
    pub fn to_map(&self) -> HashMap<K, f64> {
        self.iter().collect()
    }
}

impl<K: StateKey> fmt::Display for Distribution<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distribution:")?;
        if self.keys.is_empty() {
            writeln!(f, "  (empty)")?;
        } else {
            // Sort by key for consistent and readable output
            let mut sorted: Vec<_> = self.iter().collect();
            sorted.sort_by_key(|(key, _)| *key);
            for (key, value) in sorted {
                writeln!(f, "    {}: {:.6}", key, value)?;
            }
        }
        Ok(())
    }
}
