/// Positives per initial bin when not configured.
pub const DEFAULT_THRESHOLD_POS: usize = 5;
/// Probabilities are clipped to `[EPSILON, 1 - EPSILON]` when computing log loss.
pub const EPSILON: f64 = 1e-15;
/// Fewer distinct fit scores than this produce a degenerate calibration curve.
pub const MIN_UNIQUE_SCORES: usize = 3;
