// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors for spatial partitions.

use lattice_interval::Domain3;
use thiserror::Error;

use crate::cell::Axis;

/// Errors raised when a partition is constructed or resized with invalid parameters.
///
/// These are reported by the call that sets the parameter; the partition is either not
/// created or left exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum PartitionError {
    /// A dense grid axis was given zero bins.
    #[error("bin count along {0} must be at least 1")]
    ZeroBinCount(Axis),

    /// A hash table was given zero bins.
    #[error("bin table must have at least 1 bin")]
    EmptyTable,

    /// The total bin count does not fit the addressable range.
    #[error("bin count overflows the addressable range")]
    BinCountOverflow,

    /// A dense grid domain has an axis with zero span.
    #[error("domain must be valid, got {0}")]
    InvalidDomain(Domain3),

    /// A cell scale was zero, negative, or not finite.
    #[error("cell scale must be positive and finite, got {0}")]
    InvalidScale(f64),
}

/// Result type for partition configuration.
pub type Result<T> = core::result::Result<T, PartitionError>;
