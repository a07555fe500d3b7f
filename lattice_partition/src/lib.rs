// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lattice_partition --heading-base-level=0

//! Lattice Partition: broad-phase spatial partitions for 3D points.
//!
//! Lattice Partition is the first stage of collision and proximity queries.
//!
//! - Insert items keyed by a representative point; each lands in one bin.
//! - Query a point, a box, a sphere, or a range of cells and get *candidate* items back.
//! - Clear and rebuild every step; bins keep their allocations.
//!
//! Items are bucketed by integer [`Cell`] coordinates. How a point becomes a cell and how a
//! cell becomes a bin is decided by a pluggable [`CellMapping`], so the storage and query code
//! is shared by every strategy.
//!
//! # Example
//!
//! ```rust
//! use glam::DVec3;
//! use lattice_interval::Domain3;
//! use lattice_partition::{Cell, SpatialGrid3};
//!
//! // A 2×2×2 grid over [0, 10]³.
//! let domain = Domain3::from_corners(DVec3::ZERO, DVec3::splat(10.0));
//! let mut grid: SpatialGrid3<u32> = SpatialGrid3::new(domain, 2, 2, 2).unwrap();
//!
//! grid.insert(DVec3::splat(9.0), 7);
//! assert_eq!(grid.discretize(DVec3::splat(9.0)), Cell::new(1, 1, 1));
//! assert_eq!(grid.bin_index(DVec3::splat(9.0)), 7);
//!
//! // Query the neighborhood around a point.
//! let hits: Vec<_> = grid.query_sphere(DVec3::splat(8.0), 1.0).collect();
//! assert_eq!(hits, [&7]);
//! ```
//!
//! When objects roam without bounds, use the spatial hash instead:
//!
//! ```rust
//! use glam::DVec3;
//! use lattice_partition::{Cell, SpatialHash3};
//!
//! // 997 bins, unit cells.
//! let mut hash: SpatialHash3<&str> = SpatialHash3::new(997, 1.0).unwrap();
//! hash.insert(DVec3::splat(-0.5), "a");
//! assert_eq!(hash.discretize(DVec3::splat(-0.5)), Cell::new(-1, -1, -1));
//!
//! // Candidates may include items from colliding cells; re-test them exactly.
//! let near: Vec<_> = hash.query_point(DVec3::splat(-0.25)).collect();
//! assert_eq!(near, [&"a"]);
//! ```
//!
//! ## Choosing a mapping
//!
//! - [`GridMapping`] ([`SpatialGrid3`]): explicit [`Domain3`](lattice_interval::Domain3) and
//!   per-axis bin counts. Every cell has its own bin, so there are no collisions. Points
//!   outside the domain are clamped onto the boundary cells.
//! - [`HashMapping`] ([`SpatialHash3`]): uniform cell scale and a fixed bin table, no bounds.
//!   Cells are hashed into the table, so unrelated cells can share a bin.
//!   See the [`mappings`] docs for the hash function.
//!
//! Changing a partition's sizing ([`SpatialGrid3::set_domain`], [`SpatialHash3::set_scale`])
//! empties it, since bins computed under the old sizing are meaningless afterwards.
//!
//! ### Concurrency
//!
//! Partitions are built with `&mut self` and queried with `&self`: build on one thread, then
//! share the frozen partition for reads. They are `Send`/`Sync` whenever the item type is.
//!
//! This crate is `no_std` and uses `alloc`. Configuration errors are reported as
//! [`PartitionError`]; topology changes are logged through the `log` facade.

#![no_std]

extern crate alloc;

pub mod cell;
pub mod error;
pub mod mapping;
pub mod mappings;
pub mod partition;

pub use cell::{Axis, Cell, CellBox, CellIter};
pub use error::PartitionError;
pub use mapping::CellMapping;
pub use mappings::{GridMapping, HashMapping};
pub use partition::{SpatialGrid3, SpatialHash3, SpatialPartition};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use glam::DVec3;
    use lattice_interval::Domain3;

    /// A mapping that sends every cell with even `i` to bin 0 and odd `i` to bin 1.
    #[derive(Debug)]
    struct Parity;

    impl CellMapping for Parity {
        fn bin_count(&self) -> usize {
            2
        }

        fn discretize(&self, point: DVec3) -> Cell {
            Cell::new(lattice_interval::math::floor_to_i64(point.x), 0, 0)
        }

        fn to_index(&self, cell: Cell) -> usize {
            usize::from(cell.i.rem_euclid(2) == 1)
        }

        fn cell_bounds(&self) -> Option<CellBox> {
            None
        }
    }

    #[test]
    fn custom_mapping_plugs_into_partition() {
        let mut p = SpatialPartition::with_mapping(Parity);
        p.insert(DVec3::new(0.5, 0.0, 0.0), 'a');
        p.insert(DVec3::new(1.5, 0.0, 0.0), 'b');
        p.insert(DVec3::new(-3.5, 0.0, 0.0), 'c');
        assert_eq!(p.bin(0), &['a', 'c']);
        assert_eq!(p.bin(1), &['b']);
        assert_eq!(p.bins().count(), 2);
    }

    #[test]
    fn grid_and_hash_agree_on_candidates_with_exact_filter() {
        let domain = Domain3::from_corners(DVec3::ZERO, DVec3::splat(16.0));
        let mut grid: SpatialGrid3<usize> = SpatialGrid3::with_cell_size(domain, 2.0).unwrap();
        let mut hash: SpatialHash3<usize> = SpatialHash3::new(61, 2.0).unwrap();

        let points: Vec<DVec3> = (0..200_u32)
            .map(|n| {
                let t = f64::from(n);
                DVec3::new((t * 1.37) % 16.0, (t * 2.71) % 16.0, (t * 0.59) % 16.0)
            })
            .collect();
        for (i, &p) in points.iter().enumerate() {
            grid.insert(p, i);
            hash.insert(p, i);
        }

        fn within<'a>(
            points: &[DVec3],
            center: DVec3,
            radius: f64,
            candidates: impl Iterator<Item = &'a usize>,
        ) -> Vec<usize> {
            let mut v: Vec<usize> = candidates
                .copied()
                .filter(|&i| points[i].distance(center) <= radius)
                .collect();
            v.sort_unstable();
            v
        }

        let center = DVec3::new(8.0, 8.0, 8.0);
        let radius = 3.0;
        let brute = within(&points, center, radius, (0..points.len()).collect::<Vec<_>>().iter());
        assert!(!brute.is_empty());
        assert_eq!(within(&points, center, radius, grid.query_sphere(center, radius)), brute);
        assert_eq!(within(&points, center, radius, hash.query_sphere(center, radius)), brute);
    }

    #[test]
    fn partitions_are_send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<SpatialGrid3<u64>>();
        check::<SpatialHash3<u64>>();
    }
}
