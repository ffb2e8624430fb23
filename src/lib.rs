// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Delaunay triangulation of planar point sets with the incremental
//! Bowyer-Watson algorithm.
//!
//! ```rust
//! use rgeometry_delaunay::algorithms::triangulation::delaunay::delaunay;
//! use rgeometry_delaunay::data::{Point, Triangle};
//!
//! let triangles = delaunay(vec![(2.0, 4.0), (4.0, 2.0), (5.0, 8.0), (8.0, 3.0)])?;
//! assert_eq!(triangles.len(), 2);
//! assert!(triangles.contains(&Triangle::new([
//!   Point::new(2.0, 4.0),
//!   Point::new(4.0, 2.0),
//!   Point::new(5.0, 8.0),
//! ])));
//! # Ok::<(), rgeometry_delaunay::Error>(())
//! ```
pub mod algorithms;
pub mod data;
mod utils;

pub use utils::{nearly_equal, EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("Insufficient vertices")]
  InsufficientVertices,
  #[error("Coordinates must be finite")]
  NonFiniteCoordinate,
  /// A triangle references a point that is not part of the triangulation.
  #[error("Unknown vertex")]
  UnknownVertex,
  #[error("Duplicate triangles")]
  DuplicateTriangle,
  /// A point lies strictly inside the circumcircle of a triangle.
  #[error("Empty circumcircle violation")]
  CircumcircleViolation,
}

#[cfg(test)]
pub mod testing;
