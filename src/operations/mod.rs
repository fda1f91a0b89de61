// src/operations/mod.rs

//! The two halves of one walk step.
//!
//! - The coin operator ([`coin::hadamard`]) mixes the up and down amplitudes
//!   held at each key, independently per key.
//! - The shift operators ([`shift::shift_lattice`], [`shift::shift_graph`])
//!   move amplitude between keys according to the topology, then normalize.
//!
//! Neither carries configuration beyond the lattice decoherence flag.

pub mod coin;
pub mod shift;

pub use coin::hadamard;
pub use shift::{shift_graph, shift_lattice};
