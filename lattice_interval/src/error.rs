// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for interval arithmetic.

use thiserror::Error;

/// Interval arithmetic errors.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum IntervalError {
    /// The operation divides by the span of an interval whose bounds are equal.
    #[error("interval {t0} to {t1} has zero span")]
    ZeroSpan {
        /// Start bound of the offending interval.
        t0: f64,
        /// End bound of the offending interval.
        t1: f64,
    },
}

/// Result type for interval operations.
pub type Result<T> = core::result::Result<T, IntervalError>;
