// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial hash basics.
//!
//! Track points anywhere in space, including negative coordinates, look up the neighbors of
//! a probe, then rescale the hash and rebuild.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lattice_demos --example hash_neighbors`

use glam::DVec3;
use lattice_partition::SpatialHash3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let points = [
        ("origin", DVec3::ZERO),
        ("near", DVec3::new(0.4, -0.3, 0.2)),
        ("below", DVec3::splat(-0.5)),
        ("far", DVec3::new(-1.0e6, 3.0e5, 42.0)),
        ("edge", DVec3::new(1.9, 0.0, 0.0)),
    ];

    let mut hash: SpatialHash3<&str> = SpatialHash3::with_capacity_hint(points.len(), 1.0)?;
    for &(name, p) in &points {
        hash.insert(p, name);
        println!(
            "{name:>6} -> cell {:?}, bin {}",
            hash.discretize(p),
            hash.bin_index(p)
        );
    }

    let probe = DVec3::new(0.1, 0.1, 0.1);
    let radius = 1.0;
    let candidates: Vec<&str> = hash.query_sphere(probe, radius).copied().collect();
    let exact: Vec<&str> = points
        .iter()
        .filter(|(_, p)| p.distance(probe) <= radius)
        .map(|&(name, _)| name)
        .collect();
    let cell = hash.discretize(probe);
    println!(
        "probe cell {cell:?} starts at {}",
        hash.mapping().cell_origin(cell)
    );
    println!("candidates near {probe}: {candidates:?}");
    println!("within {radius}: {exact:?}");
    for name in &exact {
        assert!(candidates.contains(name), "exact hit {name} must be a candidate");
    }

    // Coarser cells: sizing changes empty the table, so insert again.
    hash.set_scale(4.0)?;
    assert!(hash.is_empty());
    for &(name, p) in &points {
        hash.insert(p, name);
    }
    println!(
        "at scale {}, bin of probe holds {:?}",
        hash.bin_scale(),
        hash.bin_at(probe)
    );
    Ok(())
}
