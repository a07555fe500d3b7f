// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three-dimensional domains composed of per-axis intervals.

use core::fmt;

use glam::DVec3;

use crate::error::Result;
use crate::interval::Interval;

/// An axis-aligned 3D box described by one [`Interval`] per axis.
///
/// Like [`Interval`], each axis keeps its orientation. [`from`](Self::from) is the corner made of
/// the `t0` bounds, which is the minimum corner when every axis is increasing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Domain3 {
    /// Extent along x.
    pub x: Interval,
    /// Extent along y.
    pub y: Interval,
    /// Extent along z.
    pub z: Interval,
}

impl Domain3 {
    /// The unit cube `[0, 1]³`.
    pub const UNIT: Self = Self::new(Interval::UNIT, Interval::UNIT, Interval::UNIT);

    /// Create a domain from per-axis intervals.
    pub const fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Create a domain spanning from corner `a` to corner `b`.
    pub const fn from_corners(a: DVec3, b: DVec3) -> Self {
        Self::new(
            Interval::new(a.x, b.x),
            Interval::new(a.y, b.y),
            Interval::new(a.z, b.z),
        )
    }

    /// The smallest increasing domain containing every point.
    ///
    /// Returns `None` when `points` is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut out = Self::from_corners(first, first);
        for p in iter {
            out.include(p);
        }
        Some(out)
    }

    /// Whether every axis has a non-zero span.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid() && self.z.is_valid()
    }

    /// Whether every axis is increasing.
    pub fn is_increasing(&self) -> bool {
        self.x.is_increasing() && self.y.is_increasing() && self.z.is_increasing()
    }

    /// The corner made of each axis' `t0`.
    pub fn from(&self) -> DVec3 {
        DVec3::new(self.x.t0, self.y.t0, self.z.t0)
    }

    /// The corner made of each axis' `t1`.
    pub fn to(&self) -> DVec3 {
        DVec3::new(self.x.t1, self.y.t1, self.z.t1)
    }

    /// Signed per-axis spans.
    pub fn span(&self) -> DVec3 {
        DVec3::new(self.x.span(), self.y.span(), self.z.span())
    }

    /// Center of the domain.
    pub fn mid(&self) -> DVec3 {
        DVec3::new(self.x.mid(), self.y.mid(), self.z.mid())
    }

    /// The corner of per-axis minima.
    pub fn min(&self) -> DVec3 {
        DVec3::new(self.x.min(), self.y.min(), self.z.min())
    }

    /// The corner of per-axis maxima.
    pub fn max(&self) -> DVec3 {
        DVec3::new(self.x.max(), self.y.max(), self.z.max())
    }

    /// Whether the point lies in the half-open box `[min, max)`.
    pub fn contains(&self, p: DVec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Whether the point lies in the closed box `[min, max]`.
    pub fn contains_incl(&self, p: DVec3) -> bool {
        self.x.contains_incl(p.x) && self.y.contains_incl(p.y) && self.z.contains_incl(p.z)
    }

    /// Clamp each coordinate of the point to the domain.
    pub fn clamp(&self, p: DVec3) -> DVec3 {
        DVec3::new(self.x.clamp(p.x), self.y.clamp(p.y), self.z.clamp(p.z))
    }

    /// Map normalized per-axis parameters to a point in the domain.
    pub fn evaluate(&self, uvw: DVec3) -> DVec3 {
        DVec3::new(
            self.x.evaluate(uvw.x),
            self.y.evaluate(uvw.y),
            self.z.evaluate(uvw.z),
        )
    }

    /// Inverse of [`evaluate`](Self::evaluate). Fails if any axis has zero span.
    pub fn normalize(&self, p: DVec3) -> Result<DVec3> {
        Ok(DVec3::new(
            self.x.normalize(p.x)?,
            self.y.normalize(p.y)?,
            self.z.normalize(p.z)?,
        ))
    }

    /// Shift the domain by `delta`.
    pub fn translate(&mut self, delta: DVec3) {
        self.x.translate(delta.x);
        self.y.translate(delta.y);
        self.z.translate(delta.z);
    }

    /// Push every face outward by `t`; a negative `t` shrinks the domain.
    pub fn expand(&mut self, t: f64) {
        self.x.expand(t);
        self.y.expand(t);
        self.z.expand(t);
    }

    /// Grow the domain to cover the point, keeping per-axis orientation.
    pub fn include(&mut self, p: DVec3) {
        self.x.include(p.x);
        self.y.include(p.y);
        self.z.include(p.z);
    }

    /// Reverse every decreasing axis.
    pub fn make_increasing(&mut self) {
        self.x.make_increasing();
        self.y.make_increasing();
        self.z.make_increasing();
    }
}

impl fmt::Display for Domain3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}, z: {}", self.x, self.y, self.z)
    }
}
