// src/pagerank/mod.rs

//! PageRank estimators over a [`DirectedGraph`].
//!
//! - [`ClassicalPageRank`]: a Monte-Carlo random surfer counting visits.
//! - [`QuantumPageRank`]: the graph quantum walk, read out as probabilities.
//! - [`exact::pagerank`]: power iteration, the baseline both are compared against.
//!
//! The two stepping estimators are independent types sharing only the
//! [`PageRank`] capability set and a borrowed graph.

mod classical;
mod config;
pub mod exact;
mod quantum;

pub use classical::ClassicalPageRank;
pub use config::{ConvergenceConfig, ExactConfig};
pub use quantum::{QuantumPageRank, WalkPhase};

use crate::core::{Distribution, NodeId, WalkError};
use crate::topology::DirectedGraph;

/// Capability set shared by the stepping PageRank estimators.
pub trait PageRank {
    /// Advances the estimator by one step.
    fn step(&mut self) -> Result<(), WalkError>;

    /// Current node importance, one weight per node in graph order.
    fn result(&self) -> Result<Distribution<NodeId>, WalkError>;

    /// Number of completed [`step`](PageRank::step) calls.
    fn steps(&self) -> u64;

    /// The graph the estimator walks on.
    fn graph(&self) -> &DirectedGraph;

    /// Performs `count` steps, stopping at the first failure.
    fn run(&mut self, count: u64) -> Result<(), WalkError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// The exact PageRank of the same graph with default damping.
    fn classical_solution(&self) -> Result<Distribution<NodeId>, WalkError> {
        exact::pagerank(self.graph(), &ExactConfig::default())
    }
}
