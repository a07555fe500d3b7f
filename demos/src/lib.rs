// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Lattice crates.
//!
//! See the `examples/` directory of this package; run one with
//! `cargo run -p lattice_demos --example <name>`.
