// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the Lattice partitions.
//!
//! Run with `cargo bench -p lattice_benches`.
