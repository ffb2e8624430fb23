use super::{Edge, Line, Point};
use array_init::array_init;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A triangle with its cached circumcircle.
///
/// Vertices are kept in canonical order, sorted by descending bearing from
/// the centroid, so the same three points give equal (and equally hashed)
/// triangles regardless of the order they were passed in.
///
/// Collinear triangles have no circumcircle. Their circumcenter is the
/// origin and their circumradius is zero, which makes them inert in
/// [`Triangle::circumcircle_contains`].
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
  vertices: [Point; 3],
  circumcenter: Point,
  circumradius: f64,
}

impl Triangle {
  pub fn new(pts: [Point; 3]) -> Triangle {
    // Fix the summation order of the centroid before sorting by bearing.
    let mut vertices = pts;
    vertices.sort_by(Point::lexicographic_cmp);
    let center = centroid(&vertices);
    vertices.sort_by(|a, b| {
      center
        .angle_to(b)
        .total_cmp(&center.angle_to(a))
        .then_with(|| b.compare(a))
    });
    let (circumcenter, circumradius) = circumcircle(&vertices);
    Triangle {
      vertices,
      circumcenter,
      circumradius,
    }
  }

  pub fn vertices(&self) -> &[Point; 3] {
    &self.vertices
  }

  pub fn circumcenter(&self) -> Point {
    self.circumcenter
  }

  pub fn circumradius(&self) -> f64 {
    self.circumradius
  }

  pub fn centroid(&self) -> Point {
    centroid(&self.vertices)
  }

  pub fn is_degenerate(&self) -> bool {
    self.circumradius == 0.0
  }

  /// # Panics
  ///
  /// Panics if `index` is not 0, 1 or 2.
  pub fn edge(&self, index: usize) -> Edge {
    let [a, b, c] = self.vertices;
    match index {
      0 => Edge::new(a, b),
      1 => Edge::new(b, c),
      2 => Edge::new(c, a),
      _ => panic!("invalid edge index: {}", index),
    }
  }

  pub fn edges(&self) -> [Edge; 3] {
    array_init(|i| self.edge(i))
  }

  /// True if `p` lies inside or on the circumcircle. Degenerate triangles
  /// contain nothing.
  pub fn circumcircle_contains(&self, p: &Point) -> bool {
    self.circumradius > 0.0 && p.distance_to(&self.circumcenter) <= self.circumradius
  }

  /// True if the circumcircle lies entirely to the left of `x`, so no point
  /// at `x` or beyond can fall inside it.
  pub fn is_left_of(&self, x: f64) -> bool {
    x - self.circumcenter.x_coord() > self.circumradius
  }

  pub fn has_vertex(&self, p: &Point) -> bool {
    self.vertices.contains(p)
  }

  pub fn uses_any_of(&self, vertices: &HashSet<Point>) -> bool {
    self.vertices.iter().any(|v| vertices.contains(v))
  }

  pub fn uses_any_of_slice(&self, vertices: &[Point]) -> bool {
    self.vertices.iter().any(|v| vertices.contains(v))
  }
}

// The circumcircle is derived from the vertices, so they alone decide
// equality.
impl PartialEq for Triangle {
  fn eq(&self, other: &Triangle) -> bool {
    self.vertices == other.vertices
  }
}

impl Eq for Triangle {}

impl Hash for Triangle {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.vertices.hash(state)
  }
}

impl fmt::Display for Triangle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [a, b, c] = &self.vertices;
    write!(f, "[{} - {} - {}]", a, b, c)
  }
}

fn centroid([a, b, c]: &[Point; 3]) -> Point {
  Point::new(
    (a.x_coord() + b.x_coord() + c.x_coord()) / 3.0,
    (a.y_coord() + b.y_coord() + c.y_coord()) / 3.0,
  )
}

const DEGENERATE: (Point, f64) = (Point::zero(), 0.0);

// Intersect the perpendicular bisectors of two non-horizontal edges. If all
// edges are horizontal, or the bisectors are parallel, the vertices are
// collinear.
fn circumcircle(vertices: &[Point; 3]) -> (Point, f64) {
  let [a, b, c] = *vertices;
  let edges = [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)];
  let mut candidates = edges.iter().filter(|edge| !edge.is_horizontal());
  let (e1, e2) = match (candidates.next(), candidates.next()) {
    (Some(e1), Some(e2)) => (e1, e2),
    _ => return DEGENERATE,
  };
  let bisector1 = Line::perpendicular_bisector(e1);
  let bisector2 = Line::perpendicular_bisector(e2);
  match bisector1.intersect(&bisector2) {
    Some(center) if center.is_finite() => (center, center.distance_to(&e1.p1())),
    _ => DEGENERATE,
  }
}
