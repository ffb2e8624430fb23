// http://paulbourke.net/papers/triangulate/
use super::super_triangle::super_triangle;
use super::validation::find_violation;
use crate::data::{Edge, Point, Triangle};
use crate::Error;

use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Incremental Bowyer-Watson triangulation of a planar point set.
///
/// The input points are wrapped in a scaffold triangle whose three vertices
/// are appended to the point list, and the list is sorted by x. Points are
/// then inserted one at a time, either all at once with
/// [`Triangulation::triangulate`] or stepwise with [`Triangulation::step`].
/// [`Triangulation::finalize`] strips every triangle that touches the
/// scaffold.
///
/// ```rust
/// use rgeometry_delaunay::algorithms::Triangulation;
///
/// let mut net = Triangulation::new(vec![(0.0, 40.0), (40.0, 0.0), (50.0, 100.0)])?;
/// while let Some(p) = net.step() {
///   println!("inserted {}: {} triangles", p, net.triangles().len());
/// }
/// net.finalize();
/// assert_eq!(net.triangles().len(), 1);
/// # Ok::<(), rgeometry_delaunay::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Triangulation {
  points: Vec<Point>,
  triangles: Vec<Triangle>,
  super_triangle: Triangle,
  super_vertices: HashSet<Point>,
  cursor: usize,
}

impl Triangulation {
  /// Create a triangulation of `points`. Nothing is inserted yet.
  ///
  /// Duplicate points are accepted but may produce degenerate triangles.
  pub fn new<P, I>(points: I) -> Result<Triangulation, Error>
  where
    P: Into<Point>,
    I: IntoIterator<Item = P>,
  {
    let mut points: Vec<Point> = points.into_iter().map(Into::into).collect();
    if !points.iter().all(Point::is_finite) {
      return Err(Error::NonFiniteCoordinate);
    }
    let super_triangle = super_triangle(&points).ok_or(Error::InsufficientVertices)?;
    let super_vertices: HashSet<Point> = super_triangle.vertices().iter().copied().collect();
    points.extend(super_triangle.vertices());
    // Insertion relies on non-decreasing x to skip settled triangles.
    points.sort_by(|a, b| a.x_coord().total_cmp(&b.x_coord()));
    debug!(
      points = points.len() - 3,
      scaffold = %super_triangle,
      "initialized triangulation"
    );
    Ok(Triangulation {
      points,
      triangles: vec![super_triangle],
      super_triangle,
      super_vertices,
      cursor: 0,
    })
  }

  /// Number of points, scaffold vertices included.
  pub fn point_count(&self) -> usize {
    self.points.len()
  }

  pub fn point(&self, index: usize) -> Option<&Point> {
    self.points.get(index)
  }

  /// All points sorted by x, scaffold vertices included.
  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn triangles(&self) -> &[Triangle] {
    &self.triangles
  }

  pub fn into_triangles(self) -> Vec<Triangle> {
    self.triangles
  }

  pub fn super_triangle(&self) -> &Triangle {
    &self.super_triangle
  }

  pub fn super_vertices(&self) -> &HashSet<Point> {
    &self.super_vertices
  }

  /// True if `triangle` uses a scaffold vertex.
  pub fn is_super(&self, triangle: &Triangle) -> bool {
    triangle.uses_any_of(&self.super_vertices)
  }

  /// Number of points [`Triangulation::step`] has not inserted yet.
  pub fn remaining(&self) -> usize {
    self.points.len() - self.cursor
  }

  pub fn is_complete(&self) -> bool {
    self.remaining() == 0
  }

  /// Insert the next point of the sorted point list and return it, or
  /// `None` once every point has been inserted.
  pub fn step(&mut self) -> Option<Point> {
    let p = *self.points.get(self.cursor)?;
    self.cursor += 1;
    self.insert(p);
    Some(p)
  }

  /// One Bowyer-Watson step: remove every triangle whose circumcircle
  /// contains `v` and fill the cavity with triangles fanning out from `v`.
  ///
  /// Triangles whose circumcircle lies entirely left of `v` are skipped
  /// without a distance test. That shortcut is only sound when points are
  /// inserted in non-decreasing x order, which [`Triangulation::step`]
  /// guarantees.
  ///
  /// Scaffold vertices are already part of the triangulation and inserting
  /// them is a no-op.
  pub fn insert(&mut self, v: Point) {
    if self.super_vertices.contains(&v) {
      trace!(point = %v, "skipping scaffold vertex");
      return;
    }

    // Boundary edges of the cavity occur exactly once. Edges shared by two
    // removed triangles are interior.
    let mut counts: HashMap<Edge, usize> = HashMap::new();
    let mut seen: Vec<Edge> = Vec::new();
    let before = self.triangles.len();
    self.triangles.retain(|t| {
      if t.is_left_of(v.x_coord()) || !t.circumcircle_contains(&v) {
        return true;
      }
      for edge in t.edges() {
        let count = counts.entry(edge).or_insert(0);
        if *count == 0 {
          seen.push(edge);
        }
        *count += 1;
      }
      false
    });
    let removed = before - self.triangles.len();

    let created: Vec<Triangle> = seen
      .into_iter()
      .filter(|edge| counts[edge] == 1)
      .map(|edge| Triangle::new([v, edge.p1(), edge.p2()]))
      .collect();
    trace!(
      point = %v,
      removed,
      created = created.len(),
      "inserted point"
    );
    self.triangles.extend(created);
  }

  /// Remove every triangle that uses a scaffold vertex.
  ///
  /// Idempotent, and safe to call before every point has been inserted.
  pub fn finalize(&mut self) {
    let before = self.triangles.len();
    let super_vertices = &self.super_vertices;
    self.triangles.retain(|t| !t.uses_any_of(super_vertices));
    debug!(
      removed = before - self.triangles.len(),
      remaining = self.triangles.len(),
      "finalized triangulation"
    );
  }

  /// Insert every remaining point, finalize, and return the triangles.
  pub fn triangulate(&mut self) -> &[Triangle] {
    while self.step().is_some() {}
    self.finalize();
    &self.triangles
  }

  /// Check the invariants of the current triangle set: every vertex is a
  /// known point, no triangle appears twice, and no inserted point lies
  /// strictly inside a circumcircle.
  pub fn validate(&self) -> Result<(), Error> {
    let known: HashSet<&Point> = self.points.iter().collect();
    if self
      .triangles
      .iter()
      .any(|t| t.vertices().iter().any(|v| !known.contains(v)))
    {
      return Err(Error::UnknownVertex);
    }
    let mut unique = HashSet::with_capacity(self.triangles.len());
    if !self.triangles.iter().all(|t| unique.insert(t)) {
      return Err(Error::DuplicateTriangle);
    }
    match find_violation(&self.triangles, &self.points[..self.cursor]) {
      Some(_) => Err(Error::CircumcircleViolation),
      None => Ok(()),
    }
  }
}

/// Delaunay triangulation of `points`.
///
/// ```rust
/// use rgeometry_delaunay::algorithms::delaunay;
///
/// let triangles = delaunay(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.1]])?;
/// assert_eq!(triangles.len(), 2);
/// # Ok::<(), rgeometry_delaunay::Error>(())
/// ```
pub fn delaunay<P, I>(points: I) -> Result<Vec<Triangle>, Error>
where
  P: Into<Point>,
  I: IntoIterator<Item = P>,
{
  let mut net = Triangulation::new(points)?;
  net.triangulate();
  Ok(net.into_triangles())
}
