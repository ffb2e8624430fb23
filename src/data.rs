mod edge;
mod line;
mod point;
mod triangle;

pub use edge::Edge;
pub(crate) use line::Line;
pub use point::Point;
pub use triangle::Triangle;
