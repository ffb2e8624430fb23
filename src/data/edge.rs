use super::Point;
use crate::utils::nearly_equal;
use std::cmp::Ordering;
use std::fmt;

///////////////////////////////////////////////////////////////////////////////
// Edge

/// Undirected edge between two points.
///
/// The endpoints are stored in canonical orientation: `p1` is the greater of
/// the two under [`Point::compare`]. `Edge::new(a, b) == Edge::new(b, a)` and
/// both hash the same, so edges can be counted in a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
  p1: Point,
  p2: Point,
}

impl Edge {
  pub fn new(a: Point, b: Point) -> Edge {
    if b.compare(&a) == Ordering::Greater {
      Edge { p1: b, p2: a }
    } else {
      Edge { p1: a, p2: b }
    }
  }

  pub fn p1(&self) -> Point {
    self.p1
  }

  pub fn p2(&self) -> Point {
    self.p2
  }

  pub fn midpoint(&self) -> Point {
    self.p1.midpoint(&self.p2)
  }

  pub fn is_horizontal(&self) -> bool {
    nearly_equal(self.p1.y_coord(), self.p2.y_coord())
  }

  pub fn is_vertical(&self) -> bool {
    nearly_equal(self.p1.x_coord(), self.p2.x_coord())
  }
}

impl fmt::Display for Edge {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {}", self.p1, self.p2)
  }
}
