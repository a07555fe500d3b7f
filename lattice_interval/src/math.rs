// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers shared by [`Interval`](crate::Interval) and the partition crates.
//!
//! Everything here is plain `core` arithmetic, so the crate does not need `std` or `libm`
//! for its own math. Functions taking a pair of bounds `a`, `b` do not require `a <= b`
//! unless noted; callers that divide by `b - a` are expected to check for a zero span first.

use core::cmp::Ordering;

/// Floor a float to the nearest integer toward negative infinity.
///
/// Values outside the `i64` range saturate at `i64::MIN`/`i64::MAX`; NaN maps to `0`.
#[inline]
pub fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Saturating float-to-int casts are the intended conversion."
    )]
    let i = v as i64;
    if (i as f64) > v { i.saturating_sub(1) } else { i }
}

/// Clamp `t` to `[min, max]`. Assumes `min <= max`.
#[inline]
pub fn clamp(t: f64, min: f64, max: f64) -> f64 {
    if t < min {
        min
    } else if t > max {
        max
    } else {
        t
    }
}

/// Clamp an integer coordinate to `[0, max]`.
#[inline]
pub fn clamp_index(i: i64, max: i64) -> i64 {
    i.clamp(0, max.max(0))
}

/// Clamp `t` to `[0, 1]`.
#[inline]
pub fn saturate(t: f64) -> f64 {
    clamp(t, 0.0, 1.0)
}

/// Linear interpolation from `a` to `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the parameter of `t` between `a` and `b`. Divides by `b - a`.
#[inline]
pub fn normalize(t: f64, a: f64, b: f64) -> f64 {
    (t - a) / (b - a)
}

/// Map `t` from the range `a0..a1` onto `b0..b1`. Divides by `a1 - a0`.
#[inline]
pub fn remap(t: f64, a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    b0 + (t - a0) * (b1 - b0) / (a1 - a0)
}

/// Linear ramp from 0 at `a` to 1 at `b`, saturated outside.
///
/// When `a == b` the ramp degenerates to a step at `a`.
#[inline]
pub fn ramp(t: f64, a: f64, b: f64) -> f64 {
    if a == b {
        return if t < a { 0.0 } else { 1.0 };
    }
    saturate(normalize(t, a, b))
}

/// Cubic Hermite easing over `a..b`.
#[inline]
pub fn smooth_step(t: f64, a: f64, b: f64) -> f64 {
    let x = ramp(t, a, b);
    x * x * (3.0 - 2.0 * x)
}

/// Quintic easing over `a..b` with zero first and second derivatives at both ends.
#[inline]
pub fn smoother_step(t: f64, a: f64, b: f64) -> f64 {
    let x = ramp(t, a, b);
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Wrap `t` into the half-open range `[min(a, b), max(a, b))`. Requires `a != b`.
#[inline]
pub fn wrap(t: f64, a: f64, b: f64) -> f64 {
    let lo = min_t(a, b);
    let hi = max_t(a, b);
    let d = hi - lo;
    let mut r = (t - lo) % d;
    if r < 0.0 {
        r += d;
    }
    let out = lo + r;
    // `r + d` can round up to exactly `d` for tiny negative remainders.
    if out >= hi { lo } else { out }
}

/// Whichever of `a` and `b` is closer to `t`. Ties go to `a`.
#[inline]
pub fn nearest(t: f64, a: f64, b: f64) -> f64 {
    if abs(t - b) < abs(t - a) { b } else { a }
}

/// Absolute value without relying on `std` float intrinsics.
#[inline]
pub(crate) fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}
