// src/pagerank/quantum.rs

use super::PageRank;
use super::config::ConvergenceConfig;
use crate::core::{AmplitudePair, AmplitudeState, Distribution, NodeId, WalkError};
use crate::topology::DirectedGraph;
use crate::validation::distributions_close;
use crate::walk::directed_graph;
use std::fmt;

/// Where a [`QuantumPageRank`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkPhase {
    /// Seeded, no step taken yet.
    Constructed,
    /// At least one step taken.
    Stepping,
    /// The stagnation detector accepted the current probabilities.
    Converged,
}

impl fmt::Display for WalkPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkPhase::Constructed => write!(f, "constructed"),
            WalkPhase::Stepping => write!(f, "stepping"),
            WalkPhase::Converged => write!(f, "converged"),
        }
    }
}

/// PageRank read off a quantum walk on a directed graph.
///
/// Every node starts at the amplitude pair `(1, i)`. Each step applies the
/// Hadamard coin and the graph shift; node importance is the probability
/// held at each node. The walk is fully deterministic.
#[derive(Debug, Clone)]
pub struct QuantumPageRank<'g> {
    graph: &'g DirectedGraph,
    state: AmplitudeState<NodeId>,
    steps: u64,
    phase: WalkPhase,
    config: ConvergenceConfig,
}

impl<'g> QuantumPageRank<'g> {
    /// Creates a freshly seeded walk with the default stopping rule.
    pub fn new(graph: &'g DirectedGraph) -> Self {
        Self::seeded(graph, ConvergenceConfig::default())
    }

    /// Creates a freshly seeded walk with a custom stopping rule.
    pub fn with_config(graph: &'g DirectedGraph, config: ConvergenceConfig) -> Result<Self, WalkError> {
        config.validate()?;
        Ok(Self::seeded(graph, config))
    }

    fn seeded(graph: &'g DirectedGraph, config: ConvergenceConfig) -> Self {
        let mut state = AmplitudeState::over(graph);
        state.fill(AmplitudePair::balanced());
        log::debug!("quantum pagerank seeded over {} nodes", state.len());
        Self { graph, state, steps: 0, phase: WalkPhase::Constructed, config }
    }

    /// Current node probabilities. Valid in every phase.
    pub fn probabilities(&self) -> Distribution<NodeId> {
        self.state.probabilities()
    }

    pub fn state(&self) -> &AmplitudeState<NodeId> {
        &self.state
    }

    pub fn phase(&self) -> WalkPhase {
        self.phase
    }

    pub fn config(&self) -> &ConvergenceConfig {
        &self.config
    }

    /// Steps this walk until two consecutive probability mappings are close.
    ///
    /// The first comparison is against an all-zero mapping, so at least one
    /// step is always taken. Stagnation is not proof of stationarity: a
    /// slowly drifting walk may be accepted early.
    ///
    /// # Returns
    /// * The probabilities at the moment of stagnation; the walk is then `Converged`.
    /// * `Err(WalkError::NonConvergence)` if `max_steps` steps pass without stagnation.
    pub fn converge(&mut self) -> Result<Distribution<NodeId>, WalkError> {
        let rtol = Some(self.config.rtol);
        let atol = Some(self.config.atol);
        let mut previous = Distribution::zeros(self.state.keys());
        let mut current = self.probabilities();
        let mut taken = 0u64;

        while !distributions_close(&previous, &current, rtol, atol) {
            if taken >= self.config.max_steps {
                log::warn!("quantum walk still moving after {} steps", taken);
                return Err(WalkError::NonConvergence {
                    steps: self.steps,
                    message: format!("probabilities did not stagnate within {} steps", self.config.max_steps),
                });
            }
            previous = current;
            self.step()?;
            taken += 1;
            current = self.probabilities();
        }

        self.phase = WalkPhase::Converged;
        log::info!("quantum solution took {} steps to complete", self.steps);
        Ok(current)
    }

    /// The stagnation point of a freshly seeded walk on the same graph.
    /// This walk is left untouched.
    pub fn quantum_solution(&self) -> Result<Distribution<NodeId>, WalkError> {
        let mut fresh = Self::seeded(self.graph, self.config.clone());
        fresh.converge()
    }
}

impl PageRank for QuantumPageRank<'_> {
    fn step(&mut self) -> Result<(), WalkError> {
        directed_graph(self.graph, &mut self.state)?;
        self.steps += 1;
        self.phase = WalkPhase::Stepping;
        log::trace!("quantum pagerank step {}", self.steps);
        Ok(())
    }

    fn result(&self) -> Result<Distribution<NodeId>, WalkError> {
        Ok(self.probabilities())
    }

    fn steps(&self) -> u64 {
        self.steps
    }

    fn graph(&self) -> &DirectedGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> DirectedGraph {
        DirectedGraph::from_edges([(0u64, 1u64), (1, 2), (2, 0)]).expect("valid graph")
    }

    #[test]
    fn test_phases() -> Result<(), WalkError> {
        let graph = cycle();
        let mut qpr = QuantumPageRank::new(&graph);
        assert_eq!(qpr.phase(), WalkPhase::Constructed);
        // Seeded, not normalized: every node holds |1|^2 + |i|^2.
        assert!(qpr.probabilities().values().iter().all(|&p| p == 2.0));

        qpr.step()?;
        assert_eq!(qpr.phase(), WalkPhase::Stepping);
        assert_eq!(qpr.steps(), 1);

        qpr.converge()?;
        assert_eq!(qpr.phase(), WalkPhase::Converged);
        Ok(())
    }

    #[test]
    fn test_cycle_converges_to_uniform() -> Result<(), WalkError> {
        let graph = cycle();
        let qpr = QuantumPageRank::new(&graph);
        let solution = qpr.quantum_solution()?;
        for value in solution.values() {
            assert!((value - 1.0 / 3.0).abs() < 1e-9);
        }
        // The receiver was not advanced.
        assert_eq!(qpr.steps(), 0);
        Ok(())
    }

    #[test]
    fn test_step_cap_reports_non_convergence() -> Result<(), WalkError> {
        let graph = DirectedGraph::from_edges([(0u64, 1u64), (0, 2), (1, 2), (2, 0), (3, 0)])?;
        let config = ConvergenceConfig::default().with_max_steps(1);
        let mut qpr = QuantumPageRank::with_config(&graph, config)?;
        assert!(matches!(qpr.converge(), Err(WalkError::NonConvergence { steps: 1, .. })));
        assert_eq!(qpr.phase(), WalkPhase::Stepping);
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let graph = cycle();
        let config = ConvergenceConfig::default().with_max_steps(0);
        assert!(QuantumPageRank::with_config(&graph, config).is_err());
    }
}
