// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `SpatialPartition` API and generic bin storage over a pluggable cell mapping.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::{self, Debug};

use glam::DVec3;
use log::trace;

use crate::cell::{Cell, CellBox};
use crate::mapping::CellMapping;
use crate::mappings::{GridMapping, HashMapping};

/// Bins of items addressed through a [`CellMapping`].
///
/// Items are stored by value in the bin their representative point maps to at insertion
/// time. The partition never tracks items after that: if an item moves, remove and insert
/// it again, or rebuild the partition with [`clear`](Self::clear) and a fresh pass of inserts.
///
/// Queries return *candidates*. A bin can hold items from points anywhere in its cell (and,
/// for hashed mappings, from unrelated cells that collide), so callers finish with their own
/// exact test.
pub struct SpatialPartition<T, M: CellMapping> {
    pub(crate) mapping: M,
    bins: Vec<Vec<T>>,
    len: usize,
}

/// Dense grid partition over an explicit domain.
pub type SpatialGrid3<T> = SpatialPartition<T, GridMapping>;

/// Spatial hash partition over unbounded space.
pub type SpatialHash3<T> = SpatialPartition<T, HashMapping>;

impl<T, M: CellMapping> SpatialPartition<T, M> {
    /// Create an empty partition with one bin per slot of `mapping`.
    pub fn with_mapping(mapping: M) -> Self {
        let mut bins = Vec::new();
        bins.resize_with(mapping.bin_count(), Vec::new);
        Self {
            mapping,
            bins,
            len: 0,
        }
    }

    /// The cell mapping.
    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Number of bins. Fixed for the lifetime of the partition.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cell coordinates of a point.
    pub fn discretize(&self, point: DVec3) -> Cell {
        self.mapping.discretize(point)
    }

    /// Bin index of a cell.
    pub fn to_index(&self, cell: Cell) -> usize {
        self.mapping.to_index(cell)
    }

    /// Bin index of a point.
    pub fn bin_index(&self, point: DVec3) -> usize {
        self.to_index(self.discretize(point))
    }

    /// Store `item` in the bin of `point`.
    pub fn insert(&mut self, point: DVec3, item: T) {
        let idx = self.bin_index(point);
        self.bins[idx].push(item);
        self.len += 1;
    }

    /// Empty every bin. The bin count and allocations are kept.
    pub fn clear(&mut self) {
        for bin in &mut self.bins {
            bin.clear();
        }
        self.len = 0;
        trace!("cleared {} bins", self.bins.len());
    }

    /// Items in the bin at `index`. Out-of-range indices yield an empty slice.
    pub fn bin(&self, index: usize) -> &[T] {
        match self.bins.get(index) {
            Some(bin) => bin,
            None => &[],
        }
    }

    /// Items in the bin of `point`.
    pub fn bin_at(&self, point: DVec3) -> &[T] {
        self.bin(self.bin_index(point))
    }

    /// Non-empty bins with their indices.
    pub fn bins(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.bins
            .iter()
            .enumerate()
            .filter(|(_, bin)| !bin.is_empty())
            .map(|(i, bin)| (i, bin.as_slice()))
    }

    /// Every stored item, bin by bin.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.bins.iter().flatten()
    }

    /// Cells within Chebyshev distance `radius` of `cell`, limited to the mapping's bounds.
    pub fn neighborhood(&self, cell: Cell, radius: u32) -> CellBox {
        let around = CellBox::around(cell, radius);
        match self.mapping.cell_bounds() {
            Some(bounds) => around.intersect(&bounds),
            None => around,
        }
    }

    /// Candidate items stored in the bin of `point`.
    pub fn query_point(&self, point: DVec3) -> impl Iterator<Item = &T> + '_ {
        self.bin_at(point).iter()
    }

    /// Candidate items stored in the bins of every cell in `cells`.
    ///
    /// Each bin is visited once, even when several cells map to it.
    ///
    /// For bounded mappings, cells outside the bounds are folded onto the boundary first, the
    /// same way points are.
    pub fn query_cells(&self, cells: CellBox) -> impl Iterator<Item = &T> + '_ {
        let cells = match self.mapping.cell_bounds() {
            Some(bounds) => cells.clamp_to(&bounds),
            None => cells,
        };
        let mut set = BTreeSet::new();
        if cells.cell_count() >= self.bins.len() as u128 {
            // At least as many cells as bins: scanning the table is no more work.
            set.extend(self.bins().map(|(i, _)| i));
        } else {
            for cell in cells {
                set.insert(self.mapping.to_index(cell));
            }
        }
        set.into_iter().flat_map(move |i| self.bins[i].iter())
    }

    /// Candidate items in the cells covering the box spanned by `a` and `b`.
    pub fn query_box(&self, a: DVec3, b: DVec3) -> impl Iterator<Item = &T> + '_ {
        let cells = CellBox::spanning(self.discretize(a.min(b)), self.discretize(a.max(b)));
        self.query_cells(cells)
    }

    /// Candidate items in the cells covering the bounding box of a sphere.
    pub fn query_sphere(&self, center: DVec3, radius: f64) -> impl Iterator<Item = &T> + '_ {
        let r = DVec3::splat(radius);
        self.query_box(center - r, center + r)
    }
}

impl<T: PartialEq, M: CellMapping> SpatialPartition<T, M> {
    /// Remove one item equal to `item` from the bin of `point`.
    ///
    /// Returns whether an item was removed. The point must map to the same bin it did at
    /// insertion time; bin order is not preserved.
    pub fn remove(&mut self, point: DVec3, item: &T) -> bool {
        let idx = self.bin_index(point);
        let bin = &mut self.bins[idx];
        if let Some(pos) = bin.iter().position(|x| x == item) {
            bin.swap_remove(pos);
            self.len -= 1;
            true
        } else {
            false
        }
    }
}

impl<T, M: CellMapping + Debug> Debug for SpatialPartition<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.bins.iter().filter(|b| !b.is_empty()).count();
        f.debug_struct("SpatialPartition")
            .field("mapping", &self.mapping)
            .field("bins", &self.bins.len())
            .field("occupied", &occupied)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartitionError;
    use alloc::vec;
    use lattice_interval::Domain3;

    fn cube(lo: f64, hi: f64) -> Domain3 {
        Domain3::from_corners(DVec3::splat(lo), DVec3::splat(hi))
    }

    fn sorted<'a>(it: impl Iterator<Item = &'a u32>) -> Vec<u32> {
        let mut v: Vec<u32> = it.copied().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn grid_insert_lands_in_expected_bin() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 10.0), 2, 2, 2).unwrap();
        assert_eq!(g.bin_count(), 8);
        g.insert(DVec3::splat(9.0), 1);
        assert_eq!(g.bin(7), &[1]);
        assert_eq!(g.bin_at(DVec3::splat(6.0)), &[1]);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn clear_empties_every_query() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 4.0), 4, 4, 4).unwrap();
        for i in 0..4_u32 {
            g.insert(DVec3::splat(f64::from(i) + 0.5), i);
        }
        assert_eq!(g.iter().count(), 4);
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.bin_count(), 64);
        assert_eq!(g.iter().count(), 0);
        assert_eq!(g.bins().count(), 0);
        assert_eq!(g.query_point(DVec3::splat(0.5)).count(), 0);
        assert_eq!(g.query_box(DVec3::ZERO, DVec3::splat(4.0)).count(), 0);
    }

    #[test]
    fn set_domain_discards_items() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 10.0), 2, 2, 2).unwrap();
        g.insert(DVec3::splat(1.0), 1);
        g.insert(DVec3::splat(9.0), 2);
        g.set_domain(cube(-5.0, 5.0)).unwrap();
        assert!(g.is_empty());
        assert!(g.bins().next().is_none());
        assert_eq!(g.domain().from(), DVec3::splat(-5.0));
        assert_eq!(g.bin_scale_x(), 5.0);
    }

    #[test]
    fn failed_set_domain_keeps_items() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 10.0), 2, 2, 2).unwrap();
        g.insert(DVec3::splat(1.0), 1);
        let flat = cube(3.0, 3.0);
        assert_eq!(g.set_domain(flat), Err(PartitionError::InvalidDomain(flat)));
        assert_eq!(g.len(), 1);
        assert_eq!(g.domain(), &cube(0.0, 10.0));
    }

    #[test]
    fn set_scale_discards_items() {
        let mut h: SpatialHash3<u32> = SpatialHash3::new(31, 1.0).unwrap();
        h.insert(DVec3::new(-3.0, 2.0, 8.0), 1);
        h.set_scale(4.0).unwrap();
        assert!(h.is_empty());
        assert_eq!(h.bin_scale(), 4.0);
        assert_eq!(h.set_scale(-1.0), Err(PartitionError::InvalidScale(-1.0)));
        assert_eq!(h.bin_scale(), 4.0);
    }

    #[test]
    fn hash_reinsertion_is_deterministic() {
        let mut h: SpatialHash3<u32> = SpatialHash3::new(997, 1.0).unwrap();
        let p = DVec3::splat(-0.5);
        assert_eq!(h.discretize(p), Cell::new(-1, -1, -1));
        let idx = h.bin_index(p);
        assert!(idx < 997);
        h.insert(p, 1);
        h.insert(p, 2);
        assert_eq!(h.bin(idx), &[1, 2]);
    }

    #[test]
    fn remove_takes_one_matching_item() {
        let mut h: SpatialHash3<u32> = SpatialHash3::new(7, 2.0).unwrap();
        let p = DVec3::new(1.0, 1.0, 1.0);
        h.insert(p, 3);
        h.insert(p, 3);
        h.insert(p, 4);
        assert!(h.remove(p, &3));
        assert_eq!(h.len(), 2);
        assert_eq!(sorted(h.query_point(p)), vec![3, 4]);
        assert!(!h.remove(p, &9));
        assert!(h.remove(p, &3));
        assert!(h.remove(p, &4));
        assert!(h.is_empty());
    }

    #[test]
    fn grid_box_query_collects_covered_bins() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 10.0), 10, 10, 10).unwrap();
        g.insert(DVec3::new(0.5, 0.5, 0.5), 0);
        g.insert(DVec3::new(1.5, 1.5, 1.5), 1);
        g.insert(DVec3::new(5.5, 5.5, 5.5), 2);
        g.insert(DVec3::new(9.5, 9.5, 9.5), 3);
        assert_eq!(sorted(g.query_box(DVec3::splat(2.9), DVec3::ZERO)), vec![0, 1]);
        assert_eq!(sorted(g.query_sphere(DVec3::splat(5.0), 1.0)), vec![2]);
        // Boxes outside the domain fold onto boundary cells.
        assert_eq!(
            sorted(g.query_box(DVec3::splat(20.0), DVec3::splat(30.0))),
            vec![3]
        );
    }

    #[test]
    fn neighborhood_is_bounded_for_grids_only() {
        let g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 3.0), 3, 3, 3).unwrap();
        let n = g.neighborhood(Cell::new(0, 0, 0), 1);
        assert_eq!(n, CellBox::new(Cell::new(0, 0, 0), Cell::new(1, 1, 1)));
        assert_eq!(g.neighborhood(Cell::new(1, 1, 1), 5).cell_count(), 27);

        let h: SpatialHash3<u32> = SpatialHash3::new(97, 1.0).unwrap();
        let n = h.neighborhood(Cell::new(0, 0, 0), 1);
        assert_eq!(n, CellBox::new(Cell::new(-1, -1, -1), Cell::new(1, 1, 1)));
    }

    #[test]
    fn hash_neighborhood_query_visits_colliding_bins_once() {
        // A single bin means every cell collides.
        let mut h: SpatialHash3<u32> = SpatialHash3::new(1, 1.0).unwrap();
        h.insert(DVec3::new(0.5, 0.5, 0.5), 1);
        h.insert(DVec3::new(100.5, -40.0, 7.0), 2);
        let cells = h.neighborhood(h.discretize(DVec3::splat(0.5)), 1);
        assert_eq!(sorted(h.query_cells(cells)), vec![1, 2]);
    }

    #[test]
    fn hash_box_query_finds_negative_neighbors() {
        let mut h: SpatialHash3<u32> = SpatialHash3::new(4099, 1.0).unwrap();
        h.insert(DVec3::new(-0.5, -0.5, -0.5), 1);
        h.insert(DVec3::new(0.5, 0.5, 0.5), 2);
        h.insert(DVec3::new(50.0, 50.0, 50.0), 3);
        let hits = sorted(h.query_sphere(DVec3::ZERO, 0.75));
        assert!(hits.contains(&1));
        assert!(hits.contains(&2));
    }

    #[test]
    fn huge_hash_query_scans_table() {
        let mut h: SpatialHash3<u32> = SpatialHash3::new(8, 1.0).unwrap();
        h.insert(DVec3::new(1.0e12, 0.0, 0.0), 1);
        h.insert(DVec3::new(-1.0e12, 0.0, 0.0), 2);
        let hits = sorted(h.query_box(DVec3::splat(-1.0e13), DVec3::splat(1.0e13)));
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn grid_column_past_the_edge_stays_in_its_column() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 4.0), 4, 4, 4).unwrap();
        g.insert(DVec3::splat(0.5), 0);
        g.insert(DVec3::splat(3.5), 1);
        let column = CellBox::new(Cell::new(0, 0, 0), Cell::new(0, 0, 100));
        assert_eq!(sorted(g.query_cells(column)), vec![0]);
        let below = CellBox::new(Cell::new(-9, -9, -9), Cell::new(-1, -1, -1));
        assert_eq!(sorted(g.query_cells(below)), vec![0]);
    }

    #[test]
    fn empty_cell_box_queries_nothing() {
        let mut g: SpatialGrid3<u32> = SpatialGrid3::new(cube(0.0, 1.0), 1, 1, 1).unwrap();
        g.insert(DVec3::splat(0.5), 1);
        let empty = CellBox::new(Cell::new(1, 0, 0), Cell::new(0, 0, 0));
        assert_eq!(g.query_cells(empty).count(), 0);
    }

    #[test]
    fn out_of_range_bin_is_empty() {
        let g: SpatialHash3<u32> = SpatialHash3::new(3, 1.0).unwrap();
        assert!(g.bin(3).is_empty());
    }
}
