//! Tolerances for outline classification.

/// Relative tolerance for "parallel" (normalized cross product) and
/// "perpendicular" (normalized dot product).
pub(crate) const DIR_EPS: f64 = 1e-9;
/// Relative tolerance for "equal length".
pub(crate) const LEN_EPS: f64 = 1e-9;
