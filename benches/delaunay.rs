use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rgeometry_delaunay::algorithms::delaunay;
use rgeometry_delaunay::data::*;

pub fn gen_points<R>(rng: &mut R, n: usize) -> Vec<Point>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| {
      let pt: Point = rng.gen();
      Point::new(pt.x_coord() * 1000.0, pt.y_coord() * 1000.0)
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  for &n in &[10, 100, 1_000] {
    let pts = gen_points(&mut rng, n);
    c.bench_function(&format!("delaunay({})", n), |b| {
      b.iter_batched(|| pts.clone(), delaunay, BatchSize::SmallInput)
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
