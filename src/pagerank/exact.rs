// src/pagerank/exact.rs

//! Stationary PageRank by power iteration.
//!
//! Start from the uniform vector and repeatedly apply
//! `x' = alpha * (x P + dangling(x) / N) + (1 - alpha) / N`, where `P`
//! follows each out-edge with equal weight and `dangling(x)` is the mass
//! sitting on nodes without out-edges. Iteration stops once the L1 change
//! falls below `N * tolerance`.

use super::config::ExactConfig;
use crate::core::{Distribution, NodeId, WalkError};
use crate::topology::{DirectedGraph, Topology};

/// Computes the exact PageRank of `graph`.
///
/// # Returns
/// * A distribution over every node, summing to 1.
/// * `Err(WalkError::InvalidParameter)` for an invalid `config`.
/// * `Err(WalkError::NonConvergence)` if `max_iterations` pass without convergence.
pub fn pagerank(graph: &DirectedGraph, config: &ExactConfig) -> Result<Distribution<NodeId>, WalkError> {
    config.validate()?;
    let n = graph.node_count();
    let nf = n as f64;
    let alpha = config.alpha;

    let mut x = vec![1.0 / nf; n];
    for iteration in 1..=config.max_iterations {
        let dangling: f64 = (0..n)
            .filter(|&v| graph.successor_indices(v).is_empty())
            .map(|v| x[v])
            .sum();
        let base = alpha * dangling / nf + (1.0 - alpha) / nf;

        let mut next = vec![base; n];
        for (v, &mass) in x.iter().enumerate() {
            let successors = graph.successor_indices(v);
            if successors.is_empty() {
                continue;
            }
            let share = alpha * mass / successors.len() as f64;
            for &w in successors {
                next[w] += share;
            }
        }

        let change: f64 = next.iter().zip(x.iter()).map(|(a, b)| (a - b).abs()).sum();
        x = next;
        if change < nf * config.tolerance {
            log::debug!("exact pagerank converged after {} iterations", iteration);
            return Ok(Distribution::from_parts(graph.nodes(), x));
        }
    }

    log::warn!("exact pagerank did not converge in {} iterations", config.max_iterations);
    Err(WalkError::NonConvergence {
        steps: config.max_iterations as u64,
        message: "power iteration failed to converge".to_string(),
    })
}
