//! Converting configuration literals with the default converter.
//!
//! Run with: cargo run --example basic

use conf_literal::{allowed_pattern, convert, convert_into, convert_to_string, ty};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let settings = [
        ("threads", "8", ty!(int)),
        ("verbose", "TRUE", ty!(Boolean)),
        ("ratio", "0.75", ty!(double)),
        ("slaves", "0, 2..5, 9", ty!(List(Integer))),
        ("groups", "[ [a, b], [c] ]", ty!(List(Set(String)))),
    ];

    for (name, text, ty) in &settings {
        let value = convert(text, ty)?;
        println!("{:<8} {:<24} as {:<20} -> {}", name, text, ty.to_string(), convert_to_string(&value));
        println!("{:<8} pattern {}", "", allowed_pattern(ty));
    }

    // Typed extraction through serde
    let ports: Vec<u16> = convert_into("[8080, 9000..9003]", &ty!(List(Integer)))?;
    println!("\nports: {:?}", ports);

    // Errors carry the offending fragment
    if let Err(err) = convert("1,..,2", &ty!(List(Integer))) {
        println!("error: {}", err);
    }

    Ok(())
}
