// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell mapping abstraction used by `SpatialPartition`.

use glam::DVec3;

use crate::cell::{Cell, CellBox};

/// Strategy that turns points into cells and cells into bin indices.
///
/// A [`SpatialPartition`](crate::SpatialPartition) owns the bins; the mapping only decides
/// where things go. Implementations must keep [`to_index`](Self::to_index) within
/// `0..bin_count()` for every cell, including cells outside [`cell_bounds`](Self::cell_bounds).
pub trait CellMapping {
    /// Number of bins this mapping addresses. Fixed for the lifetime of the mapping.
    fn bin_count(&self) -> usize;

    /// Integer cell coordinates of a point.
    fn discretize(&self, point: DVec3) -> Cell;

    /// Bin index of a cell, in `0..bin_count()`.
    fn to_index(&self, cell: Cell) -> usize;

    /// The finite range of cells this mapping distinguishes, or `None` if unbounded.
    fn cell_bounds(&self) -> Option<CellBox>;
}
