//! Error handling logic

use std::fmt;

/// Identifier of a node in a directed graph topology.
/// Uniqueness is only meaningful within the graph that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        NodeId(value)
    }
}

/// Failures raised by walks, estimators and their topologies.
/// All of them are local precondition violations and are surfaced
/// to the caller immediately.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalkError {
    /// Normalization was attempted on a state whose total probability is zero.
    #[error("Degenerate State: {message}")]
    DegenerateState {
        /// DegenerateState failure message
        message: String,
    },

    /// A Monte-Carlo result was requested before any step was taken.
    #[error("Empty Walk: {message}")]
    EmptyWalk {
        /// EmptyWalk failure message
        message: String,
    },

    /// The lattice interval or graph cannot host a walk.
    #[error("Invalid Topology: {message}")]
    InvalidTopology {
        /// InvalidTopology failure message
        message: String,
    },

    /// The stagnation detector exhausted its step budget.
    #[error("No convergence after {steps} steps: {message}")]
    NonConvergence {
        /// Steps taken before giving up
        steps: u64,
        /// NonConvergence failure message
        message: String,
    },

    /// A node or lattice position that the topology does not contain.
    #[error("Unknown key: {key}")]
    KeyNotFound {
        /// Display form of the missing key
        key: String,
    },

    /// A state was handed to an operator built for a different topology.
    #[error("Topology Mismatch: {message}")]
    TopologyMismatch {
        /// TopologyMismatch failure message
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid Parameter: {message}")]
    InvalidParameter {
        /// InvalidParameter failure message
        message: String,
    },

    /// A distribution holds a weight that is negative or not finite.
    #[error("Invalid Distribution: {message}")]
    InvalidDistribution {
        /// InvalidDistribution failure message
        message: String,
    },

    /// Total probability deviates from 1 by more than the tolerance.
    #[error("Unnormalized state: total probability {total} (tolerance {tolerance})")]
    Unnormalized {
        /// Observed total probability
        total: f64,
        /// Allowed deviation from 1.0
        tolerance: f64,
    },
}
