//! Declaring enums and extra ancestors on a custom type graph.
//!
//! Run with: cargo run --example custom_types

use conf_literal::{ty, Converter, ConverterOptions, TypeGraph, TypeId, TypeInfo};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
enum Protocol {
    Tcp,
    Udp,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut graph = TypeGraph::standard();
    graph.declare_enum(TypeId::new("Protocol"), ["Tcp", "Udp"]);
    // Anything typed as `Endpoints` now parses like a List
    graph.declare(
        TypeId::LIST,
        TypeInfo::interface(vec![TypeId::COLLECTION, TypeId::new("Endpoints")]),
    );

    let converter = Converter::new(graph, ConverterOptions::new().with_max_depth(4));

    let protocols: Vec<Protocol> =
        converter.convert_into("[Tcp, Udp, Tcp]", &ty!(Endpoints(Protocol)))?;
    println!("protocols: {:?}", protocols);
    println!("pattern:   {}", converter.allowed_pattern(&ty!(List(Protocol))));

    let deep = converter.convert("[[[[[1]]]]]", &ty!(List(List(List(List(List(Integer)))))));
    println!("too deep:  {}", deep.unwrap_err());

    Ok(())
}
