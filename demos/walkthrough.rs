// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walks through the core `DynamicArray` operations and prints the state
//! after each step.
//!
//! Run with `cargo run --example walkthrough`. Reallocations are logged at
//! `trace` level.

use dynamic_array::DynamicArray;

fn report(name: &str, v: &DynamicArray<i32>) {
    println!(
        "{name}: size {} capacity {} elements {:?}",
        v.len(),
        v.capacity(),
        v.as_slice()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .without_timestamps()
        .with_level(log::LevelFilter::Trace)
        .init()?;

    let mut first = DynamicArray::new();
    first.push(2);
    first.push(3);
    first.push(6);
    println!("at(2) = {}", first.at(2)?);
    println!("at(1) = {}", first.at(1)?);
    println!("[0]   = {}", first[0]);
    report("first", &first);

    let mut second = first.clone();
    println!("first == second: {}", first == second);

    second.reserve(6)?;
    report("second after reserve(6)", &second);

    first.resize(10)?;
    report("first after resize(10)", &first);
    println!("first == second: {}", first == second);

    second.shrink_to_fit();
    report("second after shrink_to_fit", &second);

    let next = first.erase(2)?;
    println!("element after erased slot: {:?}", next.get());
    report("first after erase(2)", &first);

    first.push(6);
    report("first after push(6)", &first);

    first.resize(1)?;
    report("first after resize(1)", &first);

    match first.at(1) {
        Ok(x) => println!("at(1) = {x}"),
        Err(e) => println!("at(1) failed: {e}"),
    }
    Ok(())
}
