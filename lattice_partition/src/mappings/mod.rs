// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell mappings for different partitioning strategies.
//!
//! - `grid`: bounded dense grid over an explicit [`Domain3`](lattice_interval::Domain3).
//!   Points are clamped into the grid and every cell owns its own bin.
//! - `hash`: unbounded implicit grid with a uniform cell scale, folded into a fixed-size
//!   bin table by a spatial hash. Distinct cells may share a bin.
//!
//! Hash note
//! ---------
//! The hash multiplies each coordinate by a large prime and XORs the products:
//!
//! `h = (i * 73856093) ^ (j * 19349663) ^ (k * 83492791)`
//!
//! Multiplication wraps in 64 bits and the result is reduced with a euclidean modulo, so
//! negative and extreme coordinates always land in `0..bin_count`.

pub mod grid;
pub mod hash;

pub use grid::GridMapping;
pub use hash::HashMapping;

/// Convert a non-negative, already range-checked coordinate to an index.
#[inline]
pub(crate) fn to_usize(v: i64) -> usize {
    debug_assert!(v >= 0, "coordinate must be non-negative");
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Callers clamp or reduce `v` into a usize range first."
    )]
    let out = v as usize;
    out
}
