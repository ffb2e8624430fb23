// This module contains strategies for:
//  * points
//  * triangles
//  * point sets
// and reference areas to check triangulations against.
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Triangle};

use core::ops::Range;
use proptest::array::uniform3;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;

/// Coordinates are drawn from this range. Large enough to exercise the
/// scaffold, small enough to keep the circumcircle arithmetic well
/// conditioned.
pub const COORDINATE_RANGE: Range<f64> = -1000.0..1000.0;

pub fn any_point() -> impl Strategy<Value = Point> {
  (COORDINATE_RANGE, COORDINATE_RANGE).prop_map(|(x, y)| Point::new(x, y))
}

// Slivers are excluded: the circumcircle of a nearly collinear triangle is
// dominated by rounding error.
pub fn any_triangle() -> impl Strategy<Value = Triangle> {
  uniform3(any_point())
    .prop_filter("Well-shaped triangle", |[a, b, c]| {
      let area_2x = ((b.x_coord() - a.x_coord()) * (c.y_coord() - a.y_coord())
        - (c.x_coord() - a.x_coord()) * (b.y_coord() - a.y_coord()))
      .abs();
      let longest = a
        .distance_to(b)
        .max(b.distance_to(c))
        .max(c.distance_to(a));
      area_2x > 1e-2 * longest * longest
    })
    .prop_map(Triangle::new)
}

/// Point sets without duplicates.
pub fn point_set(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), size).prop_map(|pts| {
    let mut seen = HashSet::new();
    pts.into_iter().filter(|pt| seen.insert(*pt)).collect()
  })
}

fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
  (a.x_coord() - o.x_coord()) * (b.y_coord() - o.y_coord())
    - (a.y_coord() - o.y_coord()) * (b.x_coord() - o.x_coord())
}

pub fn triangle_area(t: &Triangle) -> f64 {
  let [a, b, c] = t.vertices();
  cross(a, b, c).abs() / 2.0
}

// One half of Andrew's monotone chain, without its last point.
fn half_hull<'a>(pts: impl Iterator<Item = &'a Point>) -> Vec<Point> {
  let mut chain: Vec<Point> = Vec::new();
  for p in pts {
    while chain.len() >= 2 && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], p) <= 0.0 {
      chain.pop();
    }
    chain.push(*p);
  }
  chain.pop();
  chain
}

pub fn convex_hull_area(pts: &[Point]) -> f64 {
  let mut sorted = pts.to_vec();
  sorted.sort_by(Point::lexicographic_cmp);
  let mut hull = half_hull(sorted.iter());
  hull.extend(half_hull(sorted.iter().rev()));
  let twice: f64 = hull
    .iter()
    .zip(hull.iter().cycle().skip(1))
    .map(|(p, q)| p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord())
    .sum();
  twice.abs() / 2.0
}

#[test]
fn hull_of_square_with_interior_point() {
  let pts = [
    Point::new(0.0, 0.0),
    Point::new(2.0, 0.0),
    Point::new(1.0, 1.0),
    Point::new(2.0, 2.0),
    Point::new(0.0, 2.0),
  ];
  assert_eq!(convex_hull_area(&pts), 4.0);
  assert_eq!(triangle_area(&Triangle::new([pts[0], pts[1], pts[3]])), 2.0);
}
