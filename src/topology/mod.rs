// src/topology/mod.rs

//! Defines the two shapes a walk can run on: a one-dimensional lattice of
//! integer positions and a directed graph of `NodeId`s.
//!
//! Both are immutable once built and reject shapes that cannot host a walk
//! (`WalkError::InvalidTopology`).

mod graph;
mod lattice;

pub use graph::{DirectedGraph, GraphBuilder};
pub use lattice::Lattice;

use crate::core::StateKey;

/// A fixed set of keys an [`AmplitudeState`](crate::core::AmplitudeState) can be built over.
pub trait Topology {
    /// Key type of a position or node.
    type Node: StateKey;

    /// Every node, in the topology's canonical order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Number of nodes. Never zero for a successfully built topology.
    fn node_count(&self) -> usize;
}
