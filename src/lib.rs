// src/lib.rs

//! `quantum_walk` - Discrete-time quantum walks and quantum PageRank
//!
//! This library evolves complex amplitude pairs over two topologies, a
//! one-dimensional lattice and a directed graph, by alternating a Hadamard
//! coin flip with a topology-aware shift. The graph walk doubles as a
//! "quantum PageRank", contrasted with a Monte-Carlo random surfer and the
//! exact power-iteration solution.

pub mod core;
pub mod operations;
pub mod topology;
pub mod walk;
pub mod pagerank;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudePair, AmplitudeState, Distribution, NodeId, WalkError};
pub use crate::operations::{hadamard, shift_graph, shift_lattice};
pub use crate::topology::{DirectedGraph, GraphBuilder, Lattice, Topology};
pub use crate::walk::LatticeWalk;
pub use crate::pagerank::{
    ClassicalPageRank, ConvergenceConfig, ExactConfig, PageRank, QuantumPageRank, WalkPhase,
};
pub use crate::validation::{
    check_distribution,
    check_normalization,
    distributions_close,
    l1_distance,
};

// Example 1: Hadamard walk on a lattice
// Seeds the origin with (1, i) and takes five steps. The spread is
// symmetric and the outermost positions carry 1/32 each.
/// ```
/// use quantum_walk::{AmplitudePair, Lattice, LatticeWalk, WalkError};
///
/// let mut walk = LatticeWalk::new(Lattice::centered(5), false);
/// walk.seed(0, AmplitudePair::balanced())?;
/// walk.run(5)?;
///
/// let probs = walk.probabilities();
/// println!("{}", probs);
/// for edge in [-5, 5] {
///     let p = probs.get(&edge).unwrap_or_default();
///     assert!((p - 1.0 / 32.0).abs() < 1e-12);
/// }
/// assert!((probs.total() - 1.0).abs() < 1e-12);
/// # Ok::<(), WalkError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Quantum vs classical PageRank
// Runs both estimators on a small graph and compares them with the exact ranking.
/// ```
/// use quantum_walk::{ClassicalPageRank, DirectedGraph, PageRank, QuantumPageRank, WalkError, l1_distance};
///
/// let graph = DirectedGraph::from_edges([(0u64, 1u64), (1, 2), (2, 0), (2, 1)])?;
///
/// let mut classical = ClassicalPageRank::with_seed(&graph, 0.85, 2024)?;
/// classical.run(50_000)?;
/// let exact = classical.classical_solution()?;
/// assert!(l1_distance(&classical.result()?, &exact)? < 0.05);
///
/// let quantum = QuantumPageRank::new(&graph);
/// let solution = quantum.quantum_solution()?;
/// assert!((solution.total() - 1.0).abs() < 1e-9);
/// # Ok::<(), WalkError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
