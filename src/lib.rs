//! # conf_literal
//!
//! Type-directed conversion between configuration literals and typed values.
//!
//! A configuration loader knows the type of every setting but not how to
//! parse it. This crate takes the text of a setting and a [`TypeDescriptor`]
//! and works out the rest: scalars, enums, nested collections, integer
//! ranges, arrays. It also renders values back into the same syntax and
//! derives a validation pattern per type for input hints.
//!
//! ## Key Features
//!
//! - **Type-directed**: the parsing strategy follows from the descriptor's
//!   shape and the declared type graph, no per-field schema
//! - **Inherited strategies**: strategies registered for `List` or `Integer`
//!   also serve `Collection`, `Iterable`, `Number` and other ancestors
//! - **Nested collections**: `[ [1, 2], [3] ]`
//! - **Integer ranges**: `1,3..5,9`
//! - **Serde extraction**: convert straight into `Vec<u16>`, `HashSet<String>`
//!   or your own enums
//!
//! ## Quick Start
//!
//! ```rust
//! use conf_literal::{allowed_pattern, convert, convert_to_string, ty};
//!
//! let ports = convert("[8080, 9000..9002]", &ty!(List(Integer))).unwrap();
//! assert_eq!(convert_to_string(&ports), "[ 8080, 9000, 9001, 9002 ]");
//!
//! let hosts = convert("[ a, b, a ]", &ty!(Set(String))).unwrap();
//! assert_eq!(hosts.len(), Some(2));
//!
//! assert_eq!(allowed_pattern(&ty!(int)), "-?[0-9]+");
//! ```
//!
//! ## Custom Types
//!
//! Enumerations and extra ancestors are declared on a [`TypeGraph`]; build a
//! [`Converter`] over it instead of using the free functions:
//!
//! ```rust
//! use conf_literal::{ty, Converter, TypeGraph, TypeId, TypeInfo};
//!
//! let mut graph = TypeGraph::standard();
//! graph.declare_enum(TypeId::new("Protocol"), ["TCP", "UDP"]);
//! graph.declare(TypeId::new("NodeList"), TypeInfo::interface(Vec::new()));
//! graph.declare(TypeId::LIST, TypeInfo::interface(vec![TypeId::COLLECTION, TypeId::new("NodeList")]));
//!
//! let converter = Converter::with_graph(graph);
//! let value = converter.convert("[TCP, UDP]", &ty!(NodeList(Protocol))).unwrap();
//! assert_eq!(value.to_string(), "[ TCP, UDP ]");
//! ```
//!
//! ## Errors
//!
//! All failures are reported as [`Error`] values carrying the offending
//! fragment; a failing element fails the whole conversion. See
//! [`syntax`] for the accepted literal syntax.

pub mod converter;
pub mod de;
pub mod error;
mod grammar;
pub mod macros;
pub mod options;
pub mod pattern;
mod range;
pub mod registry;
pub mod syntax;
pub mod tokenizer;
pub mod types;
pub mod value;

pub use converter::Converter;
pub use de::from_value;
pub use error::{Error, Result};
pub use options::ConverterOptions;
pub use registry::{Registry, Strategy};
pub use types::{parametrized, TypeDescriptor, TypeGraph, TypeId, TypeInfo, TypeKind};
pub use value::Value;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static DEFAULT_CONVERTER: Lazy<Converter> = Lazy::new(Converter::default);

/// The process-wide converter over [`TypeGraph::standard`], built on first use.
#[must_use]
pub fn default_converter() -> &'static Converter {
    &DEFAULT_CONVERTER
}

/// Converts `text` into a value of type `ty` with the default converter.
///
/// # Examples
///
/// ```rust
/// use conf_literal::{convert, ty, Value};
///
/// let value = convert("[ [1, 2], [3] ]", &ty!(List(List(Integer)))).unwrap();
/// assert_eq!(
///     value,
///     Value::List(vec![Value::from(vec![1, 2]), Value::from(vec![3])])
/// );
/// ```
///
/// # Errors
///
/// Returns an error if no strategy applies to `ty` or `text` is malformed.
pub fn convert(text: &str, ty: &TypeDescriptor) -> Result<Value> {
    default_converter().convert(text, ty)
}

/// Converts `text` with the default converter and deserializes the result into `T`.
///
/// # Examples
///
/// ```rust
/// use conf_literal::{convert_into, ty};
/// use std::collections::HashSet;
///
/// let ids: HashSet<i32> = convert_into("1..3, 2", &ty!(Set(Integer))).unwrap();
/// assert_eq!(ids.len(), 3);
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or the value does not fit `T`.
pub fn convert_into<T>(text: &str, ty: &TypeDescriptor) -> Result<T>
where
    T: DeserializeOwned,
{
    default_converter().convert_into(text, ty)
}

/// Renders a value in literal syntax.
///
/// # Examples
///
/// ```rust
/// use conf_literal::{convert_to_string, Value};
///
/// let value = Value::from(vec![Value::from(true), Value::from(1.0)]);
/// assert_eq!(convert_to_string(&value), "[ true, 1.0 ]");
/// ```
#[must_use]
pub fn convert_to_string(value: &Value) -> String {
    default_converter().convert_to_string(value)
}

/// Informational validation pattern for `ty`, see [`pattern`].
#[must_use]
pub fn allowed_pattern(ty: &TypeDescriptor) -> String {
    default_converter().allowed_pattern(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_lists_example() {
        let value = convert("[ [1, 2], [3] ]", &ty!(List(List(Integer)))).unwrap();
        assert_eq!(value.to_string(), "[ [ 1, 2 ], [ 3 ] ]");
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let value = convert("[1,1,2]", &ty!(Set(Integer))).unwrap();
        assert_eq!(value.len(), Some(2));

        let list = convert("[1,1,2]", &ty!(List(Integer))).unwrap();
        assert_eq!(list.len(), Some(3));
    }

    #[test]
    fn test_default_converter_is_shared() {
        assert!(std::ptr::eq(default_converter(), default_converter()));
    }

    #[test]
    fn test_convert_into_typed() {
        let flags: Vec<bool> = convert_into("true, FALSE", &ty!(List(Boolean))).unwrap();
        assert_eq!(flags, vec![true, false]);
    }
}
