use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

use crate::utils::nearly_equal;

/// A point in the plane.
///
/// Points are hashable and compare equal only when their coordinates are
/// identical, which makes them usable as map keys. The geometric order used
/// for canonical forms is [`Point::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
  pub array: [OrderedFloat<f64>; 2],
}

// Random sampling from the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen())
  }
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point {
      array: [OrderedFloat(x), OrderedFloat(y)],
    }
  }

  pub const fn zero() -> Point {
    Point::new(0.0, 0.0)
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1].into_inner()
  }

  pub fn is_finite(&self) -> bool {
    self.x_coord().is_finite() && self.y_coord().is_finite()
  }

  pub fn distance_to(&self, other: &Point) -> f64 {
    let dx = other.x_coord() - self.x_coord();
    let dy = other.y_coord() - self.y_coord();
    (dx * dx + dy * dy).sqrt()
  }

  /// Bearing from `self` towards `other` in degrees, in `[0, 360)`.
  ///
  /// Zero points along the positive y axis and angles grow towards the
  /// positive x axis.
  pub fn angle_to(&self, other: &Point) -> f64 {
    let dx = other.x_coord() - self.x_coord();
    let dy = other.y_coord() - self.y_coord();
    let degrees = dx.atan2(dy).to_degrees();
    let bearing = if degrees < 0.0 {
      degrees + 360.0
    } else {
      degrees
    };
    // Tiny negative bearings round up to 360.0.
    if bearing >= 360.0 {
      bearing - 360.0
    } else {
      bearing
    }
  }

  pub fn midpoint(&self, other: &Point) -> Point {
    Point::new(
      self.x_coord() + (other.x_coord() - self.x_coord()) / 2.0,
      self.y_coord() + (other.y_coord() - self.y_coord()) / 2.0,
    )
  }

  /// Order points by x. When the x coordinates are within
  /// [`EPSILON`](crate::EPSILON) of each other, y decides and the exact x
  /// breaks any remaining tie.
  ///
  /// Only bit-identical points compare `Equal`, so `0.0` and `-0.0` are
  /// ordered like `f64::total_cmp` orders them. The order is antisymmetric
  /// but, because of the tolerance, not transitive across chains of nearly
  /// equal x coordinates.
  pub fn compare(&self, other: &Point) -> Ordering {
    let (x1, y1) = (self.x_coord(), self.y_coord());
    let (x2, y2) = (other.x_coord(), other.y_coord());
    if nearly_equal(x1, x2) {
      y1.total_cmp(&y2).then_with(|| x1.total_cmp(&x2))
    } else {
      x1.total_cmp(&x2)
    }
  }

  /// Exact lexicographic order on (x, y).
  pub(crate) fn lexicographic_cmp(&self, other: &Point) -> Ordering {
    self.array.cmp(&other.array)
  }
}

impl From<(f64, f64)> for Point {
  fn from((x, y): (f64, f64)) -> Point {
    Point::new(x, y)
  }
}

impl From<[f64; 2]> for Point {
  fn from([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({:3.1}, {:3.1})", self.x_coord(), self.y_coord())
  }
}
