// src/walk/mod.rs

//! Full discrete-time quantum walk steps: a coin flip followed by a shift.
//!
//! [`one_dimension`] and [`directed_graph`] advance a caller-owned state by one
//! step. [`LatticeWalk`] bundles a lattice, its state and a step counter for
//! the common "seed one position, step N times, read probabilities" loop.

use crate::core::{AmplitudePair, AmplitudeState, Distribution, NodeId, WalkError};
use crate::operations::{shift_graph, shift_lattice};
use crate::topology::{DirectedGraph, Lattice};
use std::fmt;

/// Performs one step of the walk on a lattice, in place.
///
/// # Arguments
/// * `lattice` - The lattice `state` was built over.
/// * `state` - Amplitudes to advance; normalized on success.
/// * `decoherence` - Route the rightward mover from the down amplitude.
pub fn one_dimension(
    lattice: &Lattice,
    state: &mut AmplitudeState<i64>,
    decoherence: bool,
) -> Result<(), WalkError> {
    state.coin_flip();
    let next = shift_lattice(lattice, state, decoherence)?;
    state.replace_with(next)
}

/// Performs one step of the walk on a directed graph, in place.
pub fn directed_graph(graph: &DirectedGraph, state: &mut AmplitudeState<NodeId>) -> Result<(), WalkError> {
    state.coin_flip();
    let next = shift_graph(graph, state)?;
    state.replace_with(next)
}

/// A walk on a one-dimensional lattice that owns its topology and state.
///
/// ```
/// # use quantum_walk::{AmplitudePair, Lattice, LatticeWalk, WalkError};
/// let mut walk = LatticeWalk::new(Lattice::centered(3), false);
/// walk.seed(0, AmplitudePair::balanced())?;
/// walk.run(3)?;
/// // After an odd number of steps only odd positions are occupied.
/// assert_eq!(walk.probabilities().get(&0), Some(0.0));
/// assert!((walk.probabilities().total() - 1.0).abs() < 1e-12);
/// # Ok::<(), WalkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LatticeWalk {
    lattice: Lattice,
    state: AmplitudeState<i64>,
    decoherence: bool,
    steps: u64,
}

impl LatticeWalk {
    /// Creates a walk with every position at zero amplitude.
    pub fn new(lattice: Lattice, decoherence: bool) -> Self {
        let state = AmplitudeState::over(&lattice);
        Self { lattice, state, decoherence, steps: 0 }
    }

    /// Sets the amplitude pair at `position`, typically the starting position.
    pub fn seed(&mut self, position: i64, pair: AmplitudePair) -> Result<(), WalkError> {
        self.state.set(position, pair)
    }

    /// Performs one coin flip and shift.
    pub fn step(&mut self) -> Result<(), WalkError> {
        one_dimension(&self.lattice, &mut self.state, self.decoherence)?;
        self.steps += 1;
        log::trace!("lattice walk step {}", self.steps);
        Ok(())
    }

    /// Performs `count` steps, stopping at the first failure.
    pub fn run(&mut self, count: u64) -> Result<(), WalkError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    pub fn probabilities(&self) -> Distribution<i64> {
        self.state.probabilities()
    }

    pub fn state(&self) -> &AmplitudeState<i64> {
        &self.state
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn decoherence(&self) -> bool {
        self.decoherence
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl fmt::Display for LatticeWalk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LatticeWalk({}, decoherence: {}, steps: {})",
            self.lattice, self.decoherence, self.steps
        )
    }
}
