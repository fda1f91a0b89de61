// src/operations/shift.rs

use crate::core::constants::walk_constants::EDGE_SHARE;
use crate::core::{AmplitudePair, AmplitudeState, NodeId, WalkError};
use crate::topology::{DirectedGraph, Lattice};
use num_complex::Complex;
use num_traits::Zero;

/// Moves lattice amplitude one position to either side and normalizes the result.
///
/// Every interior position `i` sends its up amplitude to `i + 1` and its
/// down amplitude to `i - 1`. With `decoherence` set, the rightward mover
/// is taken from the down amplitude instead, which washes out interference
/// and gives a classical-looking spread. Boundary positions receive
/// amplitude but never emit it, so anything sitting there is lost on the
/// next shift.
///
/// # Returns
/// * The shifted, normalized state.
/// * `Err(WalkError::TopologyMismatch)` if `state` was not built over `lattice`.
/// * `Err(WalkError::DegenerateState)` if nothing survives the shift.
pub fn shift_lattice(
    lattice: &Lattice,
    state: &AmplitudeState<i64>,
    decoherence: bool,
) -> Result<AmplitudeState<i64>, WalkError> {
    if !state.keys().iter().copied().eq(lattice.positions()) {
        return Err(WalkError::TopologyMismatch {
            message: format!("State with {} keys is not defined over {}", state.len(), lattice),
        });
    }

    let current = state.pairs();
    let mut next = state.clone();
    next.fill(AmplitudePair::zero());
    let out = next.pairs_mut();

    // Slot i holds position start + i; slots 0 and len - 1 are the boundaries.
    for i in 1..current.len().saturating_sub(1) {
        let pair = current[i];
        out[i + 1].up += if decoherence { pair.down } else { pair.up };
        out[i - 1].down += pair.down;
    }

    log::trace!("lattice shift: pre-normalization total {:.6}", next.total_probability());
    next.normalize()?;
    Ok(next)
}

/// Redistributes amplitude over a directed graph and normalizes the result.
///
/// For every node `v`:
/// - the up amplitude stays at `v`;
/// - half of the down amplitude is split evenly over `v`'s successors
///   (nothing, for a node without out-edges);
/// - the other half is split evenly over all `N` nodes, `v` included.
///
/// # Returns
/// * The shifted, normalized state.
/// * `Err(WalkError::TopologyMismatch)` if `state` was not built over `graph`.
/// * `Err(WalkError::DegenerateState)` if the state carries no amplitude.
pub fn shift_graph(
    graph: &DirectedGraph,
    state: &AmplitudeState<NodeId>,
) -> Result<AmplitudeState<NodeId>, WalkError> {
    if state.keys() != graph.node_ids() {
        return Err(WalkError::TopologyMismatch {
            message: format!(
                "State with {} keys is not defined over a graph of {} nodes",
                state.len(),
                graph.node_ids().len()
            ),
        });
    }

    let current = state.pairs();
    let node_count = current.len() as f64;
    let mut next = state.clone();
    next.fill(AmplitudePair::zero());
    let out = next.pairs_mut();

    let mut teleported = Complex::zero();
    for (v, pair) in current.iter().enumerate() {
        out[v].up += pair.up;

        let successors = graph.successor_indices(v);
        if !successors.is_empty() {
            let share = pair.down * (EDGE_SHARE / successors.len() as f64);
            for &w in successors {
                out[w].down += share;
            }
        }
        teleported += pair.down;
    }

    // Each source spreads (1 - EDGE_SHARE) of its down amplitude over all N nodes.
    let per_node = teleported * ((1.0 - EDGE_SHARE) / node_count);
    for pair in out.iter_mut() {
        pair.down += per_node;
    }

    log::trace!("graph shift: pre-normalization total {:.6}", next.total_probability());
    next.normalize()?;
    Ok(next)
}
