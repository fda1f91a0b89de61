// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod amplitude;
pub mod state;
pub mod distribution;

// Re-export public types for convenient access via `quantum_walk::core::TypeName`
pub use error::{NodeId, WalkError};
pub use amplitude::AmplitudePair;
pub use state::{AmplitudeState, StateKey};
pub use distribution::Distribution;

pub mod constants;
pub use constants::walk_constants::{DEFAULT_ATOL, DEFAULT_DAMPING, DEFAULT_RTOL}; // Re-export
