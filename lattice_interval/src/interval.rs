// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional intervals with orientation-aware arithmetic.

use core::fmt;

use crate::error::{IntervalError, Result};
use crate::math::{self, max_t, min_t};

/// A 1D range from `t0` to `t1`.
///
/// The bounds are not required to be ordered. An interval with `t1 < t0` is *decreasing*;
/// queries such as [`clamp`](Self::clamp) and [`contains`](Self::contains) operate on the true
/// minimum and maximum regardless of the stored order, while parametric operations such as
/// [`evaluate`](Self::evaluate) and [`normalize`](Self::normalize) respect it.
///
/// An interval is *valid* when its bounds differ. Operations that divide by the span
/// return [`IntervalError::ZeroSpan`] for invalid intervals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interval {
    /// Start bound.
    pub t0: f64,
    /// End bound.
    pub t1: f64,
}

impl Interval {
    /// The unit interval `0 to 1`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Create an interval from its bounds.
    pub const fn new(t0: f64, t1: f64) -> Self {
        Self { t0, t1 }
    }

    /// The smallest increasing interval containing every sample.
    ///
    /// Returns `None` when `values` is empty.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let mut out = Self::new(first, first);
        out.include_all(iter);
        Some(out)
    }

    /// Remap `t` from `from` onto `to`.
    ///
    /// Fails if `from` has zero span.
    pub fn remap(t: f64, from: Self, to: Self) -> Result<f64> {
        from.check_valid()?;
        Ok(math::remap(t, from.t0, from.t1, to.t0, to.t1))
    }

    /// The overlap of two intervals, returned increasing.
    ///
    /// Orientation of the inputs is ignored. When the intervals do not overlap with positive
    /// length, the result is a zero-span (invalid) interval collapsed onto the start of the
    /// gap between them, so callers can test the outcome with [`is_valid`](Self::is_valid).
    pub fn intersect(a: Self, b: Self) -> Self {
        let lo = max_t(a.min(), b.min());
        let hi = min_t(a.max(), b.max());
        if hi > lo {
            Self::new(lo, hi)
        } else {
            Self::new(hi, hi)
        }
    }

    /// The convex hull of two intervals, returned increasing.
    pub fn union(a: Self, b: Self) -> Self {
        Self::new(min_t(a.min(), b.min()), max_t(a.max(), b.max()))
    }

    /// Whether `t1 >= t0`.
    pub fn is_increasing(&self) -> bool {
        self.t1 >= self.t0
    }

    /// Whether the bounds differ.
    pub fn is_valid(&self) -> bool {
        self.t0 != self.t1
    }

    /// Signed length `t1 - t0`.
    pub fn span(&self) -> f64 {
        self.t1 - self.t0
    }

    /// Midpoint of the bounds.
    pub fn mid(&self) -> f64 {
        (self.t0 + self.t1) * 0.5
    }

    /// The smaller bound.
    pub fn min(&self) -> f64 {
        min_t(self.t0, self.t1)
    }

    /// The larger bound.
    pub fn max(&self) -> f64 {
        max_t(self.t0, self.t1)
    }

    /// Whether the two intervals share a range of positive length.
    pub fn overlaps(&self, other: &Self) -> bool {
        Self::intersect(*self, *other).is_valid()
    }

    /// Whether both bounds are within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        math::abs(other.t0 - self.t0) < epsilon && math::abs(other.t1 - self.t1) < epsilon
    }

    /// Replace both bounds.
    pub fn set(&mut self, t0: f64, t1: f64) {
        self.t0 = t0;
        self.t1 = t1;
    }

    /// Linear interpolation from `t0` to `t1`.
    pub fn evaluate(&self, t: f64) -> f64 {
        math::lerp(self.t0, self.t1, t)
    }

    /// Inverse of [`evaluate`](Self::evaluate). The result is not clamped to `[0, 1]`.
    pub fn normalize(&self, t: f64) -> Result<f64> {
        self.check_valid()?;
        Ok(math::normalize(t, self.t0, self.t1))
    }

    /// Clamp `t` to the interval.
    pub fn clamp(&self, t: f64) -> f64 {
        math::clamp(t, self.min(), self.max())
    }

    /// Whichever bound is closer to `t`.
    pub fn nearest(&self, t: f64) -> f64 {
        math::nearest(t, self.t0, self.t1)
    }

    /// Linear ramp from 0 at `t0` to 1 at `t1`, saturated outside the interval.
    pub fn ramp(&self, t: f64) -> f64 {
        math::ramp(t, self.t0, self.t1)
    }

    /// Cubic easing from 0 at `t0` to 1 at `t1`.
    pub fn smooth_step(&self, t: f64) -> f64 {
        math::smooth_step(t, self.t0, self.t1)
    }

    /// Quintic easing from 0 at `t0` to 1 at `t1`.
    pub fn smoother_step(&self, t: f64) -> f64 {
        math::smoother_step(t, self.t0, self.t1)
    }

    /// Wrap `t` into `[min, max)`.
    pub fn wrap(&self, t: f64) -> Result<f64> {
        self.check_valid()?;
        Ok(math::wrap(t, self.t0, self.t1))
    }

    /// Whether `t` lies in the half-open range `[min, max)`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.min() && t < self.max()
    }

    /// Whether `t` lies in the closed range `[min, max]`.
    pub fn contains_incl(&self, t: f64) -> bool {
        t >= self.min() && t <= self.max()
    }

    /// Shift both bounds by `t`.
    pub fn translate(&mut self, t: f64) {
        self.t0 += t;
        self.t1 += t;
    }

    /// Push both bounds outward by `t`; a negative `t` shrinks the interval.
    pub fn expand(&mut self, t: f64) {
        if self.is_increasing() {
            self.t0 -= t;
            self.t1 += t;
        } else {
            self.t0 += t;
            self.t1 -= t;
        }
    }

    /// Grow the interval to cover `t`, keeping its orientation.
    pub fn include(&mut self, t: f64) {
        if self.is_increasing() {
            if t > self.t1 {
                self.t1 = t;
            } else if t < self.t0 {
                self.t0 = t;
            }
        } else if t > self.t0 {
            self.t0 = t;
        } else if t < self.t1 {
            self.t1 = t;
        }
    }

    /// Grow the interval to cover every sample, keeping its orientation.
    pub fn include_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for t in values {
            self.include(t);
        }
    }

    /// Swap the bounds.
    pub fn reverse(&mut self) {
        core::mem::swap(&mut self.t0, &mut self.t1);
    }

    /// Reverse the interval if it is decreasing.
    pub fn make_increasing(&mut self) {
        if !self.is_increasing() {
            self.reverse();
        }
    }

    fn check_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(IntervalError::ZeroSpan {
                t0: self.t0,
                t1: self.t1,
            })
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.t0, self.t1)
    }
}
