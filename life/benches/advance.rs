//! Benchmarks for stepping random boards

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use life::Simulation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn benchmark_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [60, 200, 500].iter() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let seeded = Simulation::random(*size, *size, 0.3, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("square", size), size, |b, _| {
            b.iter_batched(
                || seeded.clone(),
                |mut sim| black_box(sim.advance()),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_count_neighbors(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let sim = Simulation::random(60, 60, 0.5, &mut rng).unwrap();
    let grid = sim.grid();

    c.bench_function("count_live_neighbors_60x60", |b| {
        b.iter(|| {
            let mut total = 0;
            for y in 0..60 {
                for x in 0..60 {
                    total += grid.count_live_neighbors(black_box(x), black_box(y));
                }
            }
            total
        });
    });
}

criterion_group!(benches, benchmark_advance, benchmark_count_neighbors);
criterion_main!(benches);
