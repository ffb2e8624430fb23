use crate::data::{Point, Triangle};
use crate::EPSILON;

/// Find a point that lies strictly inside the circumcircle of a triangle.
///
/// "Strictly" allows a relative slack of [`EPSILON`] so that cocircular
/// points, and vertices on their own circumcircle, are not reported.
/// Degenerate triangles have no circumcircle and are skipped. O(n*m).
pub fn find_violation(triangles: &[Triangle], points: &[Point]) -> Option<(Triangle, Point)> {
  triangles
    .iter()
    .filter(|t| !t.is_degenerate())
    .find_map(|t| {
      let r = t.circumradius();
      let slack = EPSILON * r.max(1.0);
      points
        .iter()
        .find(|p| p.distance_to(&t.circumcenter()) < r - slack)
        .map(|p| (*t, *p))
    })
}

/// True if no point in `points` lies strictly inside any triangle's
/// circumcircle.
pub fn is_delaunay(triangles: &[Triangle], points: &[Point]) -> bool {
  find_violation(triangles, points).is_none()
}
