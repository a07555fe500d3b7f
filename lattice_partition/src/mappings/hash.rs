// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial hash mapping over an unbounded implicit grid.

use glam::DVec3;
use lattice_interval::math::floor_to_i64;
use log::debug;

use crate::cell::{Cell, CellBox};
use crate::error::{PartitionError, Result};
use crate::mapping::CellMapping;
use crate::mappings::to_usize;
use crate::partition::SpatialHash3;

// Axis-mixing primes.
const P1: i64 = 73_856_093;
const P2: i64 = 19_349_663;
const P3: i64 = 83_492_791;

/// Spatial hash mapping.
///
/// Discretizes points on an implicit grid of uniform `scale` covering all of space and
/// hashes the resulting cells into a fixed-size bin table. There is no clamping: any finite
/// point maps to a cell, and any cell maps to a bin.
///
/// Distinct cells can collide in the same bin, so items pulled from a bin must be re-tested
/// against the exact query region.
///
/// The hash wraps in 64 bits, so bin indices differ from 32-bit renditions of the same formula.
#[derive(Clone, Debug)]
pub struct HashMapping {
    bin_count: usize,
    modulus: i64,
    scale: f64,
    inv_scale: f64,
}

impl HashMapping {
    /// Create a hash mapping with `bin_count` bins and cells of edge length `scale`.
    pub fn new(bin_count: usize, scale: f64) -> Result<Self> {
        if bin_count == 0 {
            return Err(PartitionError::EmptyTable);
        }
        let modulus = i64::try_from(bin_count).map_err(|_| PartitionError::BinCountOverflow)?;
        let mut out = Self {
            bin_count,
            modulus,
            scale: 1.0,
            inv_scale: 1.0,
        };
        out.set_scale(scale)?;
        Ok(out)
    }

    /// Create a hash mapping sized for roughly `expected_items` entries.
    ///
    /// The table gets twice as many bins as expected items, rounded up to an odd count.
    pub fn with_capacity_hint(expected_items: usize, scale: f64) -> Result<Self> {
        let bins = expected_items.saturating_mul(2).max(1) | 1;
        Self::new(bins, scale)
    }

    /// Replace the cell scale. On error the mapping is unchanged.
    pub(crate) fn set_scale(&mut self, scale: f64) -> Result<()> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(PartitionError::InvalidScale(scale));
        }
        self.scale = scale;
        self.inv_scale = 1.0 / scale;
        debug!("hash scale set to {scale}; {} bins", self.bin_count);
        Ok(())
    }

    /// Edge length of a cell.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Minimum corner of a cell in world space.
    pub fn cell_origin(&self, cell: Cell) -> DVec3 {
        DVec3::new(cell.i as f64, cell.j as f64, cell.k as f64) * self.scale
    }
}

impl CellMapping for HashMapping {
    fn bin_count(&self) -> usize {
        self.bin_count
    }

    fn discretize(&self, point: DVec3) -> Cell {
        let p = point * self.inv_scale;
        Cell::new(floor_to_i64(p.x), floor_to_i64(p.y), floor_to_i64(p.z))
    }

    fn to_index(&self, cell: Cell) -> usize {
        let h = cell.i.wrapping_mul(P1) ^ cell.j.wrapping_mul(P2) ^ cell.k.wrapping_mul(P3);
        to_usize(h.rem_euclid(self.modulus))
    }

    fn cell_bounds(&self) -> Option<CellBox> {
        None
    }
}

impl<T> SpatialHash3<T> {
    /// Create a spatial hash partition with `bin_count` bins and cells of edge length `scale`.
    pub fn new(bin_count: usize, scale: f64) -> Result<Self> {
        Ok(Self::with_mapping(HashMapping::new(bin_count, scale)?))
    }

    /// Create a spatial hash partition sized for roughly `expected_items` entries.
    pub fn with_capacity_hint(expected_items: usize, scale: f64) -> Result<Self> {
        Ok(Self::with_mapping(HashMapping::with_capacity_hint(expected_items, scale)?))
    }

    /// Replace the cell scale.
    ///
    /// Every stored item is discarded, since cells computed at the old scale are meaningless
    /// at the new one. On error nothing changes.
    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        self.mapping.set_scale(scale)?;
        self.clear();
        Ok(())
    }

    /// Edge length of a cell.
    pub fn bin_scale(&self) -> f64 {
        self.mapping.scale()
    }
}
