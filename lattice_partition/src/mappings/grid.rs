// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense grid mapping over an explicit domain.

use glam::DVec3;
use lattice_interval::Domain3;
use lattice_interval::math::{clamp_index, floor_to_i64};
use log::debug;

use crate::cell::{Axis, Cell, CellBox};
use crate::error::{PartitionError, Result};
use crate::mapping::CellMapping;
use crate::mappings::to_usize;
use crate::partition::SpatialGrid3;

/// Dense grid mapping.
///
/// Subdivides a [`Domain3`] into `nx × ny × nz` cells with one bin each. Points outside the
/// domain are folded onto the nearest boundary cell rather than rejected, so callers that
/// need strict membership should test [`Domain3::contains`] before inserting.
#[derive(Clone, Debug)]
pub struct GridMapping {
    domain: Domain3,
    from: DVec3,
    cell_size: DVec3,
    inv_cell_size: DVec3,
    nx: usize,
    ny: usize,
    nz: usize,
    nxy: usize,
    last: Cell,
}

impl GridMapping {
    /// Create a grid with the given per-axis bin counts over `domain`.
    ///
    /// Fails if any count is zero, if the total does not fit the index range, or if the
    /// domain has a zero-span axis.
    pub fn new(domain: Domain3, nx: usize, ny: usize, nz: usize) -> Result<Self> {
        let last = Cell::new(
            last_index(nx, Axis::X)?,
            last_index(ny, Axis::Y)?,
            last_index(nz, Axis::Z)?,
        );
        let nxy = nx.checked_mul(ny).ok_or(PartitionError::BinCountOverflow)?;
        nxy.checked_mul(nz).ok_or(PartitionError::BinCountOverflow)?;
        let mut out = Self {
            domain,
            from: DVec3::ZERO,
            cell_size: DVec3::ONE,
            inv_cell_size: DVec3::ONE,
            nx,
            ny,
            nz,
            nxy,
            last,
        };
        out.set_domain(domain)?;
        Ok(out)
    }

    /// Create a grid over `domain` whose cells are at most `cell_size` wide on every axis.
    ///
    /// Each axis gets `ceil(|span| / cell_size)` bins, and at least one.
    pub fn with_cell_size(domain: Domain3, cell_size: f64) -> Result<Self> {
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(PartitionError::InvalidScale(cell_size));
        }
        let count = |extent: f64| -> Result<usize> {
            let n = floor_to_i64(-(extent / cell_size)).saturating_neg().max(1);
            usize::try_from(n).map_err(|_| PartitionError::BinCountOverflow)
        };
        let extent = domain.max() - domain.min();
        Self::new(
            domain,
            count(extent.x)?,
            count(extent.y)?,
            count(extent.z)?,
        )
    }

    /// Replace the domain and recompute the cell sizes.
    ///
    /// On error the mapping is unchanged.
    pub(crate) fn set_domain(&mut self, domain: Domain3) -> Result<()> {
        if !domain.is_valid() {
            return Err(PartitionError::InvalidDomain(domain));
        }
        self.domain = domain;
        self.from = domain.from();
        let counts = DVec3::new(self.nx as f64, self.ny as f64, self.nz as f64);
        self.cell_size = domain.span() / counts;
        self.inv_cell_size = self.cell_size.recip();
        debug!(
            "grid domain set to {domain}; {}x{}x{} bins of {:?}",
            self.nx, self.ny, self.nz, self.cell_size
        );
        Ok(())
    }

    /// The active domain.
    pub fn domain(&self) -> &Domain3 {
        &self.domain
    }

    /// Signed per-axis cell size, `span / count`.
    pub fn cell_size(&self) -> DVec3 {
        self.cell_size
    }

    /// Bin count along x.
    pub fn bin_count_x(&self) -> usize {
        self.nx
    }

    /// Bin count along y.
    pub fn bin_count_y(&self) -> usize {
        self.ny
    }

    /// Bin count along z.
    pub fn bin_count_z(&self) -> usize {
        self.nz
    }

    /// Center of a cell in world space.
    pub fn cell_center(&self, cell: Cell) -> DVec3 {
        let c = DVec3::new(cell.i as f64, cell.j as f64, cell.k as f64) + DVec3::splat(0.5);
        self.from + c * self.cell_size
    }

    fn fold(&self, cell: Cell) -> Cell {
        Cell::new(
            clamp_index(cell.i, self.last.i),
            clamp_index(cell.j, self.last.j),
            clamp_index(cell.k, self.last.k),
        )
    }
}

impl CellMapping for GridMapping {
    fn bin_count(&self) -> usize {
        self.nxy * self.nz
    }

    fn discretize(&self, point: DVec3) -> Cell {
        let local = (point - self.from) * self.inv_cell_size;
        self.fold(Cell::new(
            floor_to_i64(local.x),
            floor_to_i64(local.y),
            floor_to_i64(local.z),
        ))
    }

    /// Row-major index `i + j * nx + k * nx * ny`. Cells outside the grid are folded onto
    /// the boundary first, the same way points are.
    fn to_index(&self, cell: Cell) -> usize {
        let c = self.fold(cell);
        to_usize(c.i) + to_usize(c.j) * self.nx + to_usize(c.k) * self.nxy
    }

    fn cell_bounds(&self) -> Option<CellBox> {
        Some(CellBox::new(Cell::new(0, 0, 0), self.last))
    }
}

fn last_index(count: usize, axis: Axis) -> Result<i64> {
    if count == 0 {
        return Err(PartitionError::ZeroBinCount(axis));
    }
    i64::try_from(count - 1).map_err(|_| PartitionError::BinCountOverflow)
}

impl<T> SpatialGrid3<T> {
    /// Create a dense grid partition with the given per-axis bin counts over `domain`.
    pub fn new(domain: Domain3, nx: usize, ny: usize, nz: usize) -> Result<Self> {
        Ok(Self::with_mapping(GridMapping::new(domain, nx, ny, nz)?))
    }

    /// Create a dense grid partition whose cells are at most `cell_size` wide.
    pub fn with_cell_size(domain: Domain3, cell_size: f64) -> Result<Self> {
        Ok(Self::with_mapping(GridMapping::with_cell_size(domain, cell_size)?))
    }

    /// Replace the grid's extents.
    ///
    /// Every stored item is discarded, since bin indices computed for the old domain are
    /// meaningless under the new one. On error nothing changes.
    pub fn set_domain(&mut self, domain: Domain3) -> Result<()> {
        self.mapping.set_domain(domain)?;
        self.clear();
        Ok(())
    }

    /// The active domain.
    pub fn domain(&self) -> &Domain3 {
        self.mapping.domain()
    }

    /// Bin count along x.
    pub fn bin_count_x(&self) -> usize {
        self.mapping.bin_count_x()
    }

    /// Bin count along y.
    pub fn bin_count_y(&self) -> usize {
        self.mapping.bin_count_y()
    }

    /// Bin count along z.
    pub fn bin_count_z(&self) -> usize {
        self.mapping.bin_count_z()
    }

    /// Cell size along x.
    pub fn bin_scale_x(&self) -> f64 {
        self.mapping.cell_size().x
    }

    /// Cell size along y.
    pub fn bin_scale_y(&self) -> f64 {
        self.mapping.cell_size().y
    }

    /// Cell size along z.
    pub fn bin_scale_z(&self) -> f64 {
        self.mapping.cell_size().z
    }
}
