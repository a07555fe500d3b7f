// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase pair finding.
//!
//! Scatter spheres in a box, bin their centers in a dense grid, and find touching pairs by
//! testing only candidates from neighboring cells. The result is checked against brute force.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lattice_demos --example broad_phase_pairs`

use glam::DVec3;
use lattice_interval::Domain3;
use lattice_partition::SpatialGrid3;
use log::info;

const COUNT: usize = 2000;
const RADIUS: f64 = 0.5;

struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let domain = Domain3::from_corners(DVec3::ZERO, DVec3::splat(40.0));
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    let centers: Vec<DVec3> = (0..COUNT)
        .map(|_| domain.evaluate(DVec3::new(rng.next_f64(), rng.next_f64(), rng.next_f64())))
        .collect();

    // Cells at least one diameter wide: touching spheres sit in the same or adjacent cells.
    let mut grid: SpatialGrid3<usize> = SpatialGrid3::with_cell_size(domain, 2.0 * RADIUS)?;
    for (i, &c) in centers.iter().enumerate() {
        grid.insert(c, i);
    }
    info!(
        "{} spheres in {}x{}x{} bins",
        grid.len(),
        grid.bin_count_x(),
        grid.bin_count_y(),
        grid.bin_count_z()
    );

    let first = grid.discretize(centers[0]);
    info!(
        "sphere 0 at {} sits in cell {first:?} centered at {}",
        centers[0],
        grid.mapping().cell_center(first)
    );

    let mut pairs = Vec::new();
    let mut tested = 0_usize;
    for (i, &c) in centers.iter().enumerate() {
        let cells = grid.neighborhood(grid.discretize(c), 1);
        for &j in grid.query_cells(cells) {
            if j <= i {
                continue;
            }
            tested += 1;
            if c.distance(centers[j]) <= 2.0 * RADIUS {
                pairs.push((i, j));
            }
        }
    }

    let mut brute = 0_usize;
    for i in 0..COUNT {
        for j in (i + 1)..COUNT {
            if centers[i].distance(centers[j]) <= 2.0 * RADIUS {
                brute += 1;
            }
        }
    }

    println!(
        "touching pairs: {} (tested {} candidates, brute force would test {})",
        pairs.len(),
        tested,
        COUNT * (COUNT - 1) / 2
    );
    assert_eq!(pairs.len(), brute, "broad phase must not miss pairs");
    Ok(())
}
