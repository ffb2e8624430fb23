//! The scaffold triangle that bootstraps incremental insertion.
use crate::data::{Line, Point, Triangle};

/// Margin by which the bounding box is grown before the scaffold is built,
/// in units of [`SCAFFOLD_SCALE`] times the larger side of the box.
pub const SCAFFOLD_OFFSET: f64 = 2.0;

/// Must be large enough that no scaffold triangle survives along the convex
/// hull, and small enough to keep the circumcircle arithmetic precise.
pub const SCAFFOLD_SCALE: f64 = 1e4;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
  pub min: Point,
  pub max: Point,
}

impl Bbox {
  /// Returns `None` for an empty point set.
  pub fn from_points(points: &[Point]) -> Option<Bbox> {
    if points.is_empty() {
      return None;
    }
    let xs = points.iter().map(Point::x_coord);
    let ys = points.iter().map(Point::y_coord);
    let min_x = xs.clone().fold(f64::INFINITY, f64::min);
    let max_x = xs.fold(f64::NEG_INFINITY, f64::max);
    let min_y = ys.clone().fold(f64::INFINITY, f64::min);
    let max_y = ys.fold(f64::NEG_INFINITY, f64::max);
    Some(Bbox {
      min: Point::new(min_x, min_y),
      max: Point::new(max_x, max_y),
    })
  }

  pub fn width(&self) -> f64 {
    self.max.x_coord() - self.min.x_coord()
  }

  pub fn height(&self) -> f64 {
    self.max.y_coord() - self.min.y_coord()
  }
}

/// Builds a triangle that strictly encloses every point in `points`.
///
/// The box is grown by [`SCAFFOLD_OFFSET`] scaled with its extent. A line
/// with positive slope is laid through its lower right corner; the two
/// scaffold corners are where that line meets the left edge and the top edge
/// (extended) of the grown box. The apex sits beyond the top left corner.
///
/// Returns `None` for an empty point set.
pub fn super_triangle(points: &[Point]) -> Option<Triangle> {
  let bbox = Bbox::from_points(points)?;
  let (min_x, min_y) = (bbox.min.x_coord(), bbox.min.y_coord());
  let (max_x, max_y) = (bbox.max.x_coord(), bbox.max.y_coord());

  let offset = SCAFFOLD_OFFSET * SCAFFOLD_SCALE * bbox.width().max(bbox.height()).max(1.0);

  let bottom_left = Point::new(min_x - offset, max_y + offset);
  let top_right = Point::new(max_x + offset, min_y - offset);

  // rise <= -2 * offset and run >= offset, so the slope is finite and
  // strictly positive.
  let rise = top_right.y_coord() - bottom_left.y_coord();
  let run = top_right.x_coord() - bottom_left.x_coord() - offset;
  let line = Line::through(&top_right, -run / rise);

  let top_left = Point::new(bottom_left.x_coord(), line.y_at(bottom_left.x_coord())?);
  let bottom_right = Point::new(line.x_at(bottom_left.y_coord())?, bottom_left.y_coord());
  let apex = Point::new(min_x - offset * 5.0, max_y + offset * 5.0);
  Some(Triangle::new([top_left, bottom_right, apex]))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  // Strict containment: p is on the same side of every edge as the opposite
  // vertex.
  fn strictly_inside(t: &Triangle, p: &Point) -> bool {
    let side = |a: &Point, b: &Point, q: &Point| {
      (b.x_coord() - a.x_coord()) * (q.y_coord() - a.y_coord())
        - (b.y_coord() - a.y_coord()) * (q.x_coord() - a.x_coord())
    };
    let [a, b, c] = t.vertices();
    [(a, b, c), (b, c, a), (c, a, b)]
      .into_iter()
      .all(|(u, v, w)| side(u, v, p) * side(u, v, w) > 0.0)
  }

  #[test]
  fn empty_input() {
    assert_eq!(Bbox::from_points(&[]), None);
    assert_eq!(super_triangle(&[]), None);
  }

  #[test]
  fn bounding_box() {
    let pts = [
      Point::new(2.0, 4.0),
      Point::new(4.0, 2.0),
      Point::new(5.0, 8.0),
      Point::new(8.0, 3.0),
    ];
    let bbox = Bbox::from_points(&pts).unwrap();
    assert_eq!(bbox.min, Point::new(2.0, 2.0));
    assert_eq!(bbox.max, Point::new(8.0, 8.0));
    assert_eq!((bbox.width(), bbox.height()), (6.0, 6.0));
  }

  #[test]
  fn known_scaffold() {
    let pts = [
      Point::new(2.0, 4.0),
      Point::new(4.0, 2.0),
      Point::new(5.0, 8.0),
      Point::new(8.0, 3.0),
    ];
    let t = super_triangle(&pts).unwrap();
    assert_eq!(
      t.to_string(),
      "[(-599998.0, 600008.0) - (-119998.0, -240004.0) - (600008.0, 120008.0)]"
    );
    assert!(pts.iter().all(|p| strictly_inside(&t, p)));
    assert!(!t.is_degenerate());
  }

  #[test]
  fn single_point() {
    let p = Point::new(1.0, 1.0);
    let t = super_triangle(&[p]).unwrap();
    assert!(strictly_inside(&t, &p));
  }

  #[test]
  fn scales_with_extent() {
    let small = super_triangle(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
    let large = super_triangle(&[Point::new(0.0, 0.0), Point::new(100.0, 100.0)]).unwrap();
    assert!(large.circumradius() > 50.0 * small.circumradius());
    // A point set narrower than one unit still gets a unit sized box.
    let tiny = super_triangle(&[Point::new(0.0, 0.0), Point::new(1e-3, 0.0)]).unwrap();
    assert!((tiny.circumradius() / small.circumradius() - 1.0).abs() < 1e-3);
  }

  #[proptest]
  fn encloses_every_point(#[strategy(point_set(1..50))] pts: Vec<Point>) {
    let t = super_triangle(&pts).unwrap();
    for p in &pts {
      prop_assert!(strictly_inside(&t, p), "{} not inside {}", p, t);
    }
  }
}
