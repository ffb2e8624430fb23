pub mod delaunay;
pub mod super_triangle;
pub mod validation;
