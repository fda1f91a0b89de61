// src/topology/lattice.rs

use super::Topology;
use crate::core::WalkError;
use std::fmt;

/// The inclusive integer interval `[start, stop]` a one-dimensional walk lives on.
///
/// Neighbours of position `i` are `i - 1` and `i + 1`. Only interior
/// positions pass amplitude on; whatever reaches `start` or `stop` is
/// dropped on the following step, so the interval should be wider than
/// the number of steps the caller intends to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lattice {
    start: i64,
    stop: i64,
}

impl Lattice {
    /// Creates the lattice `[start, stop]`.
    ///
    /// # Returns
    /// * `Err(WalkError::InvalidTopology)` if `stop < start`, or if the
    ///   number of positions does not fit in a `usize`.
    pub fn new(start: i64, stop: i64) -> Result<Self, WalkError> {
        if stop < start {
            return Err(WalkError::InvalidTopology {
                message: format!("Lattice stop {} lies before start {}", stop, start),
            });
        }
        let width = stop
            .checked_sub(start)
            .and_then(|w| usize::try_from(w).ok())
            .and_then(|w| w.checked_add(1));
        if width.is_none() {
            return Err(WalkError::InvalidTopology {
                message: format!("Lattice [{}, {}] is too wide", start, stop),
            });
        }
        Ok(Self { start, stop })
    }

    /// The lattice `[-radius, radius]`, centred on the origin.
    pub fn centered(radius: u32) -> Self {
        let radius = i64::from(radius);
        Self { start: -radius, stop: radius }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Number of positions, boundaries included. `new` guarantees this fits.
    pub fn len(&self) -> usize {
        (self.stop - self.start) as usize + 1
    }

    /// Always false: a lattice holds at least one position.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, position: i64) -> bool {
        (self.start..=self.stop).contains(&position)
    }

    /// Positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = i64> {
        self.start..=self.stop
    }
}

impl Topology for Lattice {
    type Node = i64;

    fn nodes(&self) -> Vec<i64> {
        self.positions().collect()
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lattice[{}, {}]", self.start, self.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_bounds() -> Result<(), WalkError> {
        let lattice = Lattice::new(-2, 3)?;
        assert_eq!(lattice.len(), 6);
        assert_eq!(lattice.nodes(), vec![-2, -1, 0, 1, 2, 3]);
        assert!(lattice.contains(-2) && lattice.contains(3));
        assert!(!lattice.contains(4));
        Ok(())
    }

    #[test]
    fn test_single_position() -> Result<(), WalkError> {
        let lattice = Lattice::new(5, 5)?;
        assert_eq!(lattice.len(), 1);
        Ok(())
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        assert!(matches!(Lattice::new(1, 0), Err(WalkError::InvalidTopology { .. })));
    }

    #[test]
    fn test_overwide_interval_rejected() -> Result<(), WalkError> {
        assert!(matches!(
            Lattice::new(i64::MIN, i64::MAX),
            Err(WalkError::InvalidTopology { .. })
        ));
        assert!(matches!(Lattice::new(-1, i64::MAX), Err(WalkError::InvalidTopology { .. })));
        let widest = Lattice::new(0, i64::MAX)?;
        assert_eq!(widest.len() as u64, i64::MAX as u64 + 1);
        Ok(())
    }

    #[test]
    fn test_centered() {
        let lattice = Lattice::centered(4);
        assert_eq!((lattice.start(), lattice.stop()), (-4, 4));
        assert_eq!(lattice.to_string(), "Lattice[-4, 4]");
    }
}
