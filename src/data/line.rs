use super::{Edge, Point};
use crate::utils::nearly_equal;

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line in slope-intercept form. Vertical lines have no finite
/// slope and are kept separate so no infinities leak into later arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
  Vertical { x: f64 },
  Sloped { slope: f64, intercept: f64 },
}

impl Line {
  pub fn through(p: &Point, slope: f64) -> Line {
    Line::Sloped {
      slope,
      intercept: p.y_coord() - slope * p.x_coord(),
    }
  }

  /// The perpendicular bisector of `edge`.
  ///
  /// Horizontal edges give vertical bisectors and vertical edges give
  /// horizontal ones.
  pub fn perpendicular_bisector(edge: &Edge) -> Line {
    let center = edge.midpoint();
    let (p1, p2) = (edge.p1(), edge.p2());
    if edge.is_horizontal() {
      Line::Vertical {
        x: center.x_coord(),
      }
    } else if edge.is_vertical() {
      Line::through(&center, 0.0)
    } else {
      let slope = (p2.y_coord() - p1.y_coord()) / (p2.x_coord() - p1.x_coord());
      Line::through(&center, -1.0 / slope)
    }
  }

  pub fn y_at(&self, x: f64) -> Option<f64> {
    match *self {
      Line::Vertical { .. } => None,
      Line::Sloped { slope, intercept } => Some(slope * x + intercept),
    }
  }

  pub fn x_at(&self, y: f64) -> Option<f64> {
    match *self {
      Line::Vertical { x } => Some(x),
      Line::Sloped { slope, .. } if slope == 0.0 => None,
      Line::Sloped { slope, intercept } => Some((y - intercept) / slope),
    }
  }

  /// Intersection point of two lines. Parallel lines (slopes within
  /// [`EPSILON`](crate::EPSILON)) do not intersect.
  pub fn intersect(&self, other: &Line) -> Option<Point> {
    match (*self, *other) {
      (Line::Vertical { .. }, Line::Vertical { .. }) => None,
      (Line::Vertical { x }, sloped @ Line::Sloped { .. })
      | (sloped @ Line::Sloped { .. }, Line::Vertical { x }) => {
        Some(Point::new(x, sloped.y_at(x)?))
      }
      (
        Line::Sloped {
          slope: m1,
          intercept: b1,
        },
        Line::Sloped {
          slope: m2,
          intercept: b2,
        },
      ) => {
        if nearly_equal(m1, m2) {
          return None;
        }
        let x = (b2 - b1) / (m1 - m2);
        Some(Point::new(x, m1 * x + b1))
      }
    }
  }
}
