// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use lattice_interval::Domain3;
use lattice_partition::{SpatialGrid3, SpatialHash3};

const EXTENT: f64 = 1000.0;
const CELL: f64 = 20.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, extent: f64) -> Vec<DVec3> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            DVec3::new(
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
            )
        })
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<DVec3> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let centers: Vec<DVec3> = (0..n_clusters)
        .map(|_| DVec3::new(rng.next_f64(), rng.next_f64(), rng.next_f64()) * EXTENT)
        .collect();
    for c in centers {
        for _ in 0..per_cluster {
            let d = DVec3::new(rng.next_f64(), rng.next_f64(), rng.next_f64()) - 0.5;
            out.push(c + d * spread);
        }
    }
    out
}

fn new_grid() -> SpatialGrid3<u32> {
    let domain = Domain3::from_corners(DVec3::ZERO, DVec3::splat(EXTENT));
    SpatialGrid3::with_cell_size(domain, CELL).unwrap()
}

fn new_hash(expected: usize) -> SpatialHash3<u32> {
    SpatialHash3::with_capacity_hint(expected, CELL).unwrap()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_query");
    for &n in &[1024usize, 4096, 16384] {
        let points = gen_random_points(n, EXTENT);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                new_grid,
                |mut p| {
                    for (i, &pt) in points.iter().enumerate() {
                        p.insert(pt, i as u32);
                    }
                    let hits = p.query_sphere(DVec3::splat(500.0), 50.0).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("hash_n{}", n), |b| {
            b.iter_batched(
                || new_hash(n),
                |mut p| {
                    for (i, &pt) in points.iter().enumerate() {
                        p.insert(pt, i as u32);
                    }
                    let hits = p.query_sphere(DVec3::splat(500.0), 50.0).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear_and_rebuild");
    let points = gen_clustered_points(32, 256, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    let mut grid = new_grid();
    group.bench_function("grid", |b| {
        b.iter(|| {
            grid.clear();
            for (i, &pt) in points.iter().enumerate() {
                grid.insert(pt, i as u32);
            }
            black_box(grid.len());
        })
    });
    let mut hash = new_hash(points.len());
    group.bench_function("hash", |b| {
        b.iter(|| {
            hash.clear();
            for (i, &pt) in points.iter().enumerate() {
                hash.insert(pt, i as u32);
            }
            black_box(hash.len());
        })
    });
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let points = gen_random_points(8192, EXTENT);
    let queries = gen_random_points(256, EXTENT);
    let mut grid = new_grid();
    let mut hash = new_hash(points.len());
    for (i, &pt) in points.iter().enumerate() {
        grid.insert(pt, i as u32);
        hash.insert(pt, i as u32);
    }
    for &radius in &[10.0, 40.0] {
        group.bench_function(format!("grid_sphere_r{}", radius), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &q in &queries {
                    total += grid
                        .query_sphere(q, radius)
                        .filter(|&&i| points[i as usize].distance_squared(q) <= radius * radius)
                        .count();
                }
                black_box(total);
            })
        });
        group.bench_function(format!("hash_sphere_r{}", radius), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &q in &queries {
                    total += hash
                        .query_sphere(q, radius)
                        .filter(|&&i| points[i as usize].distance_squared(q) <= radius * radius)
                        .count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_rebuild, bench_query_heavy);
criterion_main!(benches);
