/// Tolerance used by every approximate comparison in the crate.
pub const EPSILON: f64 = 1e-6;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
pub fn nearly_equal(a: f64, b: f64) -> bool {
  (a - b).abs() < EPSILON
}
