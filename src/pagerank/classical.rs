// src/pagerank/classical.rs

use super::PageRank;
use super::config::check_damping;
use crate::core::constants::walk_constants::DEFAULT_DAMPING;
use crate::core::{Distribution, NodeId, WalkError};
use crate::topology::DirectedGraph;
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::StdRng;

/// PageRank estimated by a random surfer (Monte Carlo).
///
/// With probability `alpha`, and only if the current node has out-edges,
/// the surfer follows a uniformly chosen out-edge; otherwise it teleports
/// to a uniformly chosen node. The estimate is the fraction of steps that
/// ended on each node. Each estimator owns its own generator, so a fixed
/// seed reproduces the walk exactly.
#[derive(Debug)]
pub struct ClassicalPageRank<'g> {
    graph: &'g DirectedGraph,
    alpha: f64,
    /// Visits per node, indexed like `graph.node_ids()`.
    counts: Vec<u64>,
    current: usize,
    steps: u64,
    rng: StdRng,
}

impl<'g> ClassicalPageRank<'g> {
    /// Creates a surfer with the default damping factor (0.85), seeded from entropy.
    pub fn new(graph: &'g DirectedGraph) -> Self {
        let mut rng = StdRng::seed_from_u64(rand::random());
        let current = rng.random_range(0..graph.node_ids().len());
        Self::from_parts(graph, DEFAULT_DAMPING, current, rng)
    }

    /// Creates a reproducible surfer.
    ///
    /// # Returns
    /// * `Err(WalkError::InvalidParameter)` if `alpha` is outside `[0, 1]`.
    pub fn with_seed(graph: &'g DirectedGraph, alpha: f64, seed: u64) -> Result<Self, WalkError> {
        check_damping(alpha)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let current = rng.random_range(0..graph.node_ids().len());
        Ok(Self::from_parts(graph, alpha, current, rng))
    }

    fn from_parts(graph: &'g DirectedGraph, alpha: f64, current: usize, rng: StdRng) -> Self {
        log::debug!(
            "classical pagerank: alpha {}, starting at {}",
            alpha,
            graph.node_ids()[current]
        );
        Self {
            graph,
            alpha,
            counts: vec![0; graph.node_ids().len()],
            current,
            steps: 0,
            rng,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The node the surfer is on.
    pub fn current_node(&self) -> NodeId {
        self.graph.node_ids()[self.current]
    }

    /// Visit count of `node`.
    pub fn visits(&self, node: NodeId) -> Option<u64> {
        self.graph.index_of(node).map(|i| self.counts[i])
    }
}

impl PageRank for ClassicalPageRank<'_> {
    fn step(&mut self) -> Result<(), WalkError> {
        let graph = self.graph;
        let successors = graph.successor_indices(self.current);
        self.current = if successors.is_empty() || self.rng.random::<f64>() > self.alpha {
            self.rng.random_range(0..self.counts.len())
        } else {
            successors[self.rng.random_range(0..successors.len())]
        };
        self.counts[self.current] += 1;
        self.steps += 1;
        Ok(())
    }

    /// Visit frequencies.
    ///
    /// # Returns
    /// * `Err(WalkError::EmptyWalk)` before the first step.
    fn result(&self) -> Result<Distribution<NodeId>, WalkError> {
        if self.steps == 0 {
            return Err(WalkError::EmptyWalk {
                message: "No steps taken; visit frequencies are undefined".to_string(),
            });
        }
        let total = self.steps as f64;
        Ok(Distribution::from_parts(
            self.graph.node_ids().to_vec(),
            self.counts.iter().map(|&c| c as f64 / total).collect(),
        ))
    }

    fn steps(&self) -> u64 {
        self.steps
    }

    fn graph(&self) -> &DirectedGraph {
        self.graph
    }
}
