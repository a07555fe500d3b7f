// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer cell coordinates and inclusive cell ranges.

use core::fmt;

/// A coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Integer coordinates `(i, j, k)` of one cell of a partition.
///
/// A cell is the spatial identity of a region; the bin it maps to is the storage slot.
/// Several cells may share a bin in a hashed partition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Index along x.
    pub i: i64,
    /// Index along y.
    pub j: i64,
    /// Index along z.
    pub k: i64,
}

impl Cell {
    /// Create a cell from its coordinates.
    pub const fn new(i: i64, j: i64, k: i64) -> Self {
        Self { i, j, k }
    }

    /// Per-axis minimum of two cells.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.i.min(other.i), self.j.min(other.j), self.k.min(other.k))
    }

    /// Per-axis maximum of two cells.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.i.max(other.i), self.j.max(other.j), self.k.max(other.k))
    }
}

/// An inclusive box of cells `min..=max`.
///
/// The box is empty when `max` is below `min` on any axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellBox {
    /// Lowest cell in the box.
    pub min: Cell,
    /// Highest cell in the box.
    pub max: Cell,
}

impl CellBox {
    /// Create a box from its inclusive corners.
    pub const fn new(min: Cell, max: Cell) -> Self {
        Self { min, max }
    }

    /// The box holding a single cell.
    pub const fn single(cell: Cell) -> Self {
        Self::new(cell, cell)
    }

    /// Cells within Chebyshev distance `radius` of `center`.
    ///
    /// Coordinates saturate at the `i64` range.
    pub fn around(center: Cell, radius: u32) -> Self {
        let r = i64::from(radius);
        Self::new(
            Cell::new(
                center.i.saturating_sub(r),
                center.j.saturating_sub(r),
                center.k.saturating_sub(r),
            ),
            Cell::new(
                center.i.saturating_add(r),
                center.j.saturating_add(r),
                center.k.saturating_add(r),
            ),
        )
    }

    /// The box spanned by two arbitrary corners.
    pub fn spanning(a: Cell, b: Cell) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Whether the box holds no cells.
    pub fn is_empty(&self) -> bool {
        self.max.i < self.min.i || self.max.j < self.min.j || self.max.k < self.min.k
    }

    /// Whether the cell lies in the box.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.i..=self.max.i).contains(&cell.i)
            && (self.min.j..=self.max.j).contains(&cell.j)
            && (self.min.k..=self.max.k).contains(&cell.k)
    }

    /// The cells shared by both boxes. May be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Clamp both corners into `bounds`, folding cells outside it onto its boundary.
    ///
    /// Unlike [`intersect`](Self::intersect), a non-empty box that lies entirely outside
    /// `bounds` stays non-empty. Empty boxes are returned unchanged.
    pub fn clamp_to(&self, bounds: &Self) -> Self {
        if self.is_empty() {
            return *self;
        }
        let fold = |c: Cell| c.max(bounds.min).min(bounds.max);
        Self::new(fold(self.min), fold(self.max))
    }

    /// Number of cells in the box, saturating at `u128::MAX`.
    pub fn cell_count(&self) -> u128 {
        if self.is_empty() {
            return 0;
        }
        let extent = |lo: i64, hi: i64| (i128::from(hi) - i128::from(lo) + 1).unsigned_abs();
        extent(self.min.i, self.max.i)
            .saturating_mul(extent(self.min.j, self.max.j))
            .saturating_mul(extent(self.min.k, self.max.k))
    }

    /// Iterate the cells with `i` varying fastest, then `j`, then `k`.
    pub fn iter(&self) -> CellIter {
        CellIter {
            bounds: *self,
            next: (!self.is_empty()).then_some(self.min),
        }
    }
}

impl IntoIterator for CellBox {
    type Item = Cell;
    type IntoIter = CellIter;

    fn into_iter(self) -> CellIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellBox`].
#[derive(Clone, Debug)]
pub struct CellIter {
    bounds: CellBox,
    next: Option<Cell>,
}

impl Iterator for CellIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let cur = self.next?;
        let CellBox { min, max } = self.bounds;
        self.next = if cur.i < max.i {
            Some(Cell::new(cur.i + 1, cur.j, cur.k))
        } else if cur.j < max.j {
            Some(Cell::new(min.i, cur.j + 1, cur.k))
        } else if cur.k < max.k {
            Some(Cell::new(min.i, min.j, cur.k + 1))
        } else {
            None
        };
        Some(cur)
    }
}
