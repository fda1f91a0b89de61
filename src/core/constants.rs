//! Numeric constants shared by the walks and estimators.

/// Defaults used across the crate
pub mod walk_constants {
    /// Probability of following an out-edge rather than teleporting.
    pub const DEFAULT_DAMPING: f64 = 0.85;
    /// Relative tolerance of the elementwise closeness test.
    pub const DEFAULT_RTOL: f64 = 1e-5;
    /// Absolute tolerance of the elementwise closeness test.
    pub const DEFAULT_ATOL: f64 = 1e-8;
    /// Step cap for the quantum stagnation loop.
    pub const DEFAULT_MAX_STEPS: u64 = 10_000;
    /// Iteration cap for exact power iteration.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
    /// Per-node convergence tolerance for exact power iteration.
    pub const DEFAULT_POWER_TOLERANCE: f64 = 1e-6;
    /// Share of the graph shift's down amplitude sent along out-edges;
    /// the remainder teleports uniformly.
    pub const EDGE_SHARE: f64 = 0.5;
}
