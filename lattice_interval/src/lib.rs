// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lattice_interval --heading-base-level=0

//! Lattice Interval: orientation-aware 1D intervals and 3D domains.
//!
//! Lattice Interval is the scalar kernel under the Lattice spatial partitions.
//!
//! - [`Interval`]: a range `t0 to t1` whose bounds may be stored in either order.
//!   Containment and clamping use the true minimum and maximum; interpolation, normalization,
//!   and easing follow the stored direction.
//! - [`Domain3`]: three intervals forming an axis-aligned box, the extent of a dense grid.
//! - [`math`]: the free functions both types are built on (lerp, remap, wrap, smoothstep, ...).
//!
//! Operations that divide by a span ([`Interval::normalize`], [`Interval::wrap`],
//! [`Interval::remap`]) return [`IntervalError::ZeroSpan`] instead of producing infinities.
//!
//! # Example
//!
//! ```rust
//! use lattice_interval::Interval;
//!
//! // A decreasing interval behaves like its increasing counterpart for containment.
//! let d = Interval::new(5.0, 2.0);
//! assert!(!d.is_increasing());
//! assert!(d.contains(3.0));
//! assert_eq!(d.clamp(10.0), 5.0);
//!
//! // Parametric operations follow the stored direction.
//! assert_eq!(d.evaluate(0.0), 5.0);
//! assert_eq!(d.normalize(2.0).unwrap(), 1.0);
//!
//! // Disjoint intervals intersect to a zero-span interval.
//! let gap = Interval::intersect(Interval::new(0.0, 1.0), Interval::new(2.0, 3.0));
//! assert!(!gap.is_valid());
//! ```
//!
//! ### Float semantics
//!
//! Bounds are `f64`. NaN bounds are not rejected; results involving them are unspecified.
//!
//! This crate is `no_std`. Enable `std` (default) or `libm` to pick Glam's math backend.

#![no_std]

pub mod domain;
pub mod error;
pub mod interval;
pub mod math;

pub use domain::Domain3;
pub use error::IntervalError;
pub use interval::Interval;
