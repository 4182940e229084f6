//! World benchmarks using criterion for historical comparison.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use life_world::{Seed, World};

fn construction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for size in [16usize, 64, 256] {
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("fixed_seed", size), &size, |b, &size| {
            b.iter(|| black_box(World::new(size, size, Seed::default())));
        });

        group.bench_with_input(BenchmarkId::new("genesis", size), &size, |b, &size| {
            b.iter(|| black_box(World::genesis(size, size)));
        });
    }

    group.finish();
}

fn rotate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    for size in [16usize, 64, 256] {
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &size, |b, &size| {
            b.iter_batched(
                || World::new(size, size, Seed::Fixed(size as u64)).unwrap(),
                |mut world| {
                    black_box(world.rotate());
                    world
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn neighbour_benchmarks(c: &mut Criterion) {
    let world = World::genesis(64, 64).unwrap();

    c.bench_function("live_neighbours_of", |b| {
        b.iter(|| {
            for x in 0..64 {
                for y in 0..64 {
                    black_box(world.live_neighbours_of(x, y).map(|n| n.len()));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    construction_benchmarks,
    rotate_benchmarks,
    neighbour_benchmarks,
);

criterion_main!(benches);
