// Copyright 2025 the Lattice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval arithmetic.
//!
//! Intervals keep their orientation: `t0` may be greater than `t1`, and evaluation,
//! normalization and remapping respect that direction.
//!
//! Run:
//! - `cargo run -p lattice_demos --example interval_basics`

use lattice_interval::Interval;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let down = Interval::new(5.0, 2.0);
    println!("{down}: span {}, mid {}", down.span(), down.mid());
    println!("contains 3? {}", down.contains(3.0));
    println!("clamp 10 -> {}", down.clamp(10.0));
    println!("evaluate 0.25 -> {}", down.evaluate(0.25));

    // Map Celsius onto Fahrenheit.
    let celsius = Interval::new(0.0, 100.0);
    let fahrenheit = Interval::new(32.0, 212.0);
    println!("37C = {}F", Interval::remap(37.0, celsius, fahrenheit)?);

    let a = Interval::new(0.0, 4.0);
    let b = Interval::new(3.0, 8.0);
    println!("intersect({a}, {b}) = {}", Interval::intersect(a, b));
    println!("union({a}, {b}) = {}", Interval::union(a, b));

    let angle = Interval::new(0.0, 360.0);
    println!("wrap 370 into {angle} -> {}", angle.wrap(370.0)?);
    println!("wrap -30 into {angle} -> {}", angle.wrap(-30.0)?);

    let mut bounds = Interval::from_values([3.0, -1.0, 7.5]).unwrap_or_default();
    bounds.expand(0.5);
    println!("padded bounds of samples: {bounds}");

    // Zero-span intervals cannot normalize.
    if let Err(e) = Interval::new(1.0, 1.0).normalize(0.5) {
        println!("normalize failed: {e}");
    }
    Ok(())
}
