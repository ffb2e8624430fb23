// Prints every intermediate triangulation of a random point set.
//
//   cargo run --example delaunay -- [npoints] [seed]
//
// Set RUST_LOG=rgeometry_delaunay=trace to follow each insertion.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rgeometry_delaunay::algorithms::Triangulation;
use rgeometry_delaunay::data::Point;
use rgeometry_delaunay::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_POINTS: usize = 10;
const CANVAS: f64 = 100.0;

fn main() -> Result<(), Error> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let mut args = std::env::args().skip(1);
  let n: usize = args
    .next()
    .and_then(|arg| arg.parse().ok())
    .unwrap_or(DEFAULT_POINTS);
  let seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(0);

  let mut rng = SmallRng::seed_from_u64(seed);
  let points: Vec<Point> = (0..n)
    .map(|_| {
      let pt: Point = rng.gen();
      Point::new(
        (pt.x_coord() * CANVAS).round(),
        (pt.y_coord() * CANVAS).round(),
      )
    })
    .collect();

  let mut net = Triangulation::new(points)?;
  println!("scaffold {}", net.super_triangle());
  while let Some(p) = net.step() {
    println!("step {}: inserted {}", net.point_count() - net.remaining(), p);
    for t in net.triangles() {
      let marker = if net.is_super(t) { '*' } else { ' ' };
      println!("  {} {}", marker, t);
    }
  }

  net.finalize();
  println!("delaunay triangulation:");
  for t in net.triangles() {
    println!("    {}", t);
  }
  Ok(())
}
