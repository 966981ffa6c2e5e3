//! The conversion entry point.
//!
//! A [`Converter`] owns the declared [`TypeGraph`], the [`Registry`] closed
//! over it and the [`ConverterOptions`]. It is immutable once built, so one
//! instance can serve any number of threads.
//!
//! ```rust
//! use conf_literal::{ty, Converter};
//!
//! let converter = Converter::default();
//! let value = converter.convert("[ [1, 2], [3] ]", &ty!(List(List(Integer)))).unwrap();
//! assert_eq!(converter.convert_to_string(&value), "[ [ 1, 2 ], [ 3 ] ]");
//! ```

use crate::de::from_value;
use crate::{grammar, pattern};
use crate::{
    ConverterOptions, Error, Registry, Result, TypeDescriptor, TypeGraph, Value,
};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Converts literals to [`Value`]s and back, directed by a [`TypeDescriptor`].
#[derive(Clone, Debug)]
pub struct Converter {
    graph: TypeGraph,
    registry: Registry,
    options: ConverterOptions,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(TypeGraph::standard(), ConverterOptions::default())
    }
}

impl Converter {
    /// Builds the registry for `graph` and wraps it in a converter.
    #[must_use]
    pub fn new(graph: TypeGraph, options: ConverterOptions) -> Self {
        let registry = Registry::build(&graph);
        Converter {
            graph,
            registry,
            options,
        }
    }

    /// A converter over `graph` with default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::{Converter, TypeDescriptor, TypeGraph, TypeId};
    ///
    /// let mut graph = TypeGraph::standard();
    /// graph.declare_enum(TypeId::new("Level"), ["LOW", "HIGH"]);
    /// let converter = Converter::with_graph(graph);
    ///
    /// let level = converter
    ///     .convert(" HIGH ", &TypeDescriptor::scalar(TypeId::new("Level")))
    ///     .unwrap();
    /// assert_eq!(level.as_str(), Some("HIGH"));
    /// ```
    #[must_use]
    pub fn with_graph(graph: TypeGraph) -> Self {
        Converter::new(graph, ConverterOptions::default())
    }

    #[must_use]
    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Converts `text` into a value of type `ty`.
    ///
    /// # Errors
    ///
    /// Returns an error if no strategy applies to `ty`, if a collection type
    /// does not carry exactly one element type, or if `text` is malformed for
    /// the type. A failing element fails the whole conversion.
    pub fn convert(&self, text: &str, ty: &TypeDescriptor) -> Result<Value> {
        let result = Scope::root(self).convert(text, ty);
        if let Err(err) = &result {
            debug!(%ty, text, error = %err, "conversion failed");
        }
        result
    }

    /// Converts `text` and deserializes the result into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::{ty, Converter};
    ///
    /// let ports: Vec<u16> = Converter::default()
    ///     .convert_into("8080, 8090..8092", &ty!(List(Integer)))
    ///     .unwrap();
    /// assert_eq!(ports, vec![8080, 8090, 8091, 8092]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if conversion fails or the value does not fit `T`.
    pub fn convert_into<T>(&self, text: &str, ty: &TypeDescriptor) -> Result<T>
    where
        T: DeserializeOwned,
    {
        from_value(self.convert(text, ty)?)
    }

    /// Renders a value in literal syntax. Best effort: ranges come back enumerated.
    #[must_use]
    pub fn convert_to_string(&self, value: &Value) -> String {
        value.to_string()
    }

    /// Informational validation pattern for `ty`.
    #[must_use]
    pub fn allowed_pattern(&self, ty: &TypeDescriptor) -> String {
        pattern::derive(self, ty)
    }
}

/// Per-call conversion state: the converter and the current nesting depth.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scope<'a> {
    converter: &'a Converter,
    depth: usize,
}

impl<'a> Scope<'a> {
    fn root(converter: &'a Converter) -> Self {
        Scope {
            converter,
            depth: 0,
        }
    }

    pub(crate) fn options(&self) -> &'a ConverterOptions {
        &self.converter.options
    }

    /// Enters one more level of collection nesting.
    pub(crate) fn nested(&self, text: &str) -> Result<Scope<'a>> {
        let limit = self.converter.options.max_depth;
        if self.depth >= limit {
            return Err(Error::nesting_too_deep(limit, text));
        }
        Ok(Scope {
            converter: self.converter,
            depth: self.depth + 1,
        })
    }

    pub(crate) fn convert(&self, text: &str, ty: &TypeDescriptor) -> Result<Value> {
        trace!(%ty, depth = self.depth, "converting");
        let converter = self.converter;

        match ty {
            TypeDescriptor::Scalar(id) => {
                if let Some(members) = converter.graph.enum_members(id) {
                    let name = text.trim();
                    return members
                        .iter()
                        .find(|member| member.as_str() == name)
                        .map(|member| Value::Enum {
                            ty: id.clone(),
                            member: member.clone(),
                        })
                        .ok_or_else(|| Error::unknown_enum_member(id, name));
                }
                let strategy = converter
                    .registry
                    .get(id)
                    .ok_or_else(|| Error::unsupported_type(ty, text))?;
                strategy.parse(text, None, self, ty)
            }
            TypeDescriptor::Generic { raw, args } => {
                let strategy = converter
                    .registry
                    .get(raw)
                    .ok_or_else(|| Error::unsupported_type(ty, text))?;
                strategy.parse(text, Some(args.as_slice()), self, ty)
            }
            TypeDescriptor::ArrayOf(element) => grammar::parse_collection(text, element, self)
                .map(|items| Value::Array(items.into_boxed_slice())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parametrized, TypeId};

    fn scalar(id: TypeId) -> TypeDescriptor {
        TypeDescriptor::scalar(id)
    }

    #[test]
    fn test_scalar_dispatch() {
        let c = Converter::default();
        assert_eq!(c.convert(" 42 ", &scalar(TypeId::INT)).unwrap(), Value::Int(42));
        assert_eq!(
            c.convert("-7", &scalar(TypeId::LONG_OBJ)).unwrap(),
            Value::Long(-7)
        );
        assert_eq!(
            c.convert("tRuE", &scalar(TypeId::BOOLEAN)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            c.convert(" 2.5", &scalar(TypeId::DOUBLE_OBJ)).unwrap(),
            Value::Double(2.5)
        );
        assert_eq!(
            c.convert(" keep spaces ", &scalar(TypeId::STRING)).unwrap(),
            Value::from(" keep spaces ")
        );
    }

    #[test]
    fn test_unsupported_scalar() {
        let c = Converter::default();
        let err = c.convert("x", &scalar(TypeId::new("Socket"))).unwrap_err();
        assert_eq!(err, Error::unsupported_type("Socket", "x"));
    }

    #[test]
    fn test_generic_raw_must_be_registered() {
        let c = Converter::default();
        let ty = parametrized("Map", vec![scalar(TypeId::STRING)]);
        assert!(matches!(
            c.convert("a", &ty),
            Err(Error::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_enum_exact_match() {
        let mut graph = TypeGraph::standard();
        graph.declare_enum("Color", ["RED", "GREEN"]);
        let c = Converter::with_graph(graph);
        let color = scalar(TypeId::new("Color"));

        assert_eq!(
            c.convert("GREEN", &color).unwrap(),
            Value::Enum {
                ty: TypeId::new("Color"),
                member: "GREEN".to_string()
            }
        );
        assert_eq!(
            c.convert("green", &color).unwrap_err(),
            Error::unknown_enum_member("Color", "green")
        );
    }

    #[test]
    fn test_depth_limit() {
        let c = Converter::new(
            TypeGraph::standard(),
            ConverterOptions::new().with_max_depth(2),
        );
        let two = parametrized(
            TypeId::LIST,
            vec![parametrized(TypeId::LIST, vec![scalar(TypeId::INT)])],
        );
        assert!(c.convert("[[1],[2]]", &two).is_ok());

        let three = parametrized(TypeId::LIST, vec![two]);
        assert!(matches!(
            c.convert("[[[1]]]", &three),
            Err(Error::NestingTooDeep { limit: 2, .. })
        ));
    }
}
