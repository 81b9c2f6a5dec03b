//! Benchmarks for the step emitters.
//!
//! Drives each algorithm to completion on a seeded array, measuring the cost
//! of the poll-per-operation protocol itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sortviz::algorithms::Algorithm;
use sortviz::engine::{ArrayState, VizRng};

const SIZE: usize = 256;
const SEED: u64 = 42;

fn seeded_values() -> Vec<f64> {
    let mut rng = VizRng::new(SEED);
    rng.sample_n(SIZE)
}

fn bench_emitters(c: &mut Criterion) {
    let values = seeded_values();
    let mut group = c.benchmark_group("emitter_full_run");

    for algo in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algo),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut array = ArrayState::from_values(values.clone());
                    let mut emitter = algo.emitter();
                    let mut steps = 0u64;
                    while emitter.next_step(&mut array).is_some() {
                        steps += 1;
                    }
                    black_box((array.comparisons(), array.writes(), steps))
                });
            },
        );
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("array_generate_256", |b| {
        b.iter(|| {
            let mut rng = VizRng::new(black_box(SEED));
            let mut array = ArrayState::default();
            array.generate(SIZE, &mut rng);
            black_box(array.len())
        });
    });
}

criterion_group!(benches, bench_emitters, bench_generation);
criterion_main!(benches);
