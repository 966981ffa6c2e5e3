//! Parsing strategies and the registry that maps type identities to them.
//!
//! A handful of strategies are registered directly (text, the four scalar
//! kinds under both their primitive and boxed names, and the two collection
//! kinds). [`Registry::build`] then closes that seed table over the declared
//! [`TypeGraph`]: every supertype or interface reachable from a registered
//! identity inherits the strategy of the identity that discovered it, until a
//! full pass adds nothing. This is how `Collection<Integer>` or `Number` become
//! convertible without being registered themselves.
//!
//! When two strategies could reach the same ancestor, the one discovered first
//! (seed order, then declaration order of the edges) wins silently.

use crate::converter::Scope;
use crate::{grammar, pattern, Error, Result, TypeDescriptor, TypeGraph, TypeId, Value};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

/// A built-in (parse, pattern) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Text,
    Int,
    Long,
    Bool,
    Double,
    Set,
    List,
}

impl Strategy {
    pub(crate) fn parse(
        self,
        text: &str,
        args: Option<&[TypeDescriptor]>,
        scope: &Scope<'_>,
        ty: &TypeDescriptor,
    ) -> Result<Value> {
        match self {
            Strategy::Text => Ok(Value::Text(text.to_string())),
            Strategy::Int => parse_int(text).map(Value::Int),
            Strategy::Long => parse_long(text).map(Value::Long),
            Strategy::Bool => parse_bool(text).map(Value::Bool),
            Strategy::Double => {
                let token = text.trim();
                if !is_decimal(token, true) {
                    return Err(Error::number_format(token, TypeId::DOUBLE));
                }
                token
                    .parse::<f64>()
                    .map(Value::Double)
                    .map_err(|_| Error::number_format(token, TypeId::DOUBLE))
            }
            Strategy::Set => {
                let element = single_argument(args, ty)?;
                let items = grammar::parse_collection(text, element, scope)?;
                Ok(Value::Set(items.into_iter().collect::<IndexSet<_>>()))
            }
            Strategy::List => {
                let element = single_argument(args, ty)?;
                grammar::parse_collection(text, element, scope).map(Value::List)
            }
        }
    }

    pub(crate) fn pattern(
        self,
        args: Option<&[TypeDescriptor]>,
        converter: &crate::Converter,
    ) -> String {
        match self {
            Strategy::Text => pattern::ANY.to_string(),
            Strategy::Int | Strategy::Long => pattern::INTEGER.to_string(),
            Strategy::Bool => pattern::BOOLEAN.to_string(),
            Strategy::Double => pattern::DOUBLE.to_string(),
            Strategy::Set | Strategy::List => match args {
                Some([element]) => pattern::collection(converter, element),
                _ => pattern::ANY.to_string(),
            },
        }
    }
}

fn single_argument<'t>(
    args: Option<&'t [TypeDescriptor]>,
    ty: &TypeDescriptor,
) -> Result<&'t TypeDescriptor> {
    match args {
        Some([element]) => Ok(element),
        Some(args) => Err(Error::arity(ty, args.len())),
        None => Err(Error::arity(ty, 0)),
    }
}

/// Plain decimal digits with an optional leading `-` and, when `fraction`
/// is set, an optional `.digits` tail. No `+`, exponents, `inf` or `NaN`.
fn is_decimal(token: &str, fraction: bool) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    match unsigned.split_once('.') {
        Some((whole, frac)) if fraction => digits(whole) && digits(frac),
        _ => digits(unsigned),
    }
}

pub(crate) fn parse_int(text: &str) -> Result<i32> {
    let token = text.trim();
    if !is_decimal(token, false) {
        return Err(Error::number_format(token, TypeId::INT));
    }
    token
        .parse::<i32>()
        .map_err(|_| Error::number_format(token, TypeId::INT))
}

pub(crate) fn parse_long(text: &str) -> Result<i64> {
    let token = text.trim();
    if !is_decimal(token, false) {
        return Err(Error::number_format(token, TypeId::LONG));
    }
    token
        .parse::<i64>()
        .map_err(|_| Error::number_format(token, TypeId::LONG))
}

fn parse_bool(text: &str) -> Result<bool> {
    let token = text.trim();
    if token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::invalid_boolean(token))
    }
}

/// Immutable mapping from type identity to [`Strategy`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    strategies: IndexMap<TypeId, Strategy>,
}

impl Registry {
    /// The directly registered identities, in registration order.
    #[must_use]
    pub fn seeds() -> Vec<(TypeId, Strategy)> {
        vec![
            (TypeId::STRING, Strategy::Text),
            (TypeId::INT, Strategy::Int),
            (TypeId::INTEGER, Strategy::Int),
            (TypeId::LONG, Strategy::Long),
            (TypeId::LONG_OBJ, Strategy::Long),
            (TypeId::BOOLEAN, Strategy::Bool),
            (TypeId::BOOLEAN_OBJ, Strategy::Bool),
            (TypeId::DOUBLE, Strategy::Double),
            (TypeId::DOUBLE_OBJ, Strategy::Double),
            (TypeId::SET, Strategy::Set),
            (TypeId::LIST, Strategy::List),
        ]
    }

    /// Builds the registry by closing the seed table over `graph`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::{Registry, Strategy, TypeGraph, TypeId};
    ///
    /// let registry = Registry::build(&TypeGraph::standard());
    /// assert_eq!(registry.get(&TypeId::COLLECTION), Some(Strategy::Set));
    /// assert_eq!(registry.get(&TypeId::NUMBER), Some(Strategy::Int));
    /// ```
    #[must_use]
    pub fn build(graph: &TypeGraph) -> Self {
        let mut defined: IndexMap<TypeId, Strategy> = Self::seeds().into_iter().collect();

        loop {
            let mut completion = defined.clone();
            for (id, strategy) in &defined {
                let Some(info) = graph.get(id) else {
                    continue;
                };
                for ancestor in info.ancestors() {
                    if !completion.contains_key(ancestor) {
                        trace!(from = %id, to = %ancestor, ?strategy, "propagating strategy");
                        completion.insert(ancestor.clone(), *strategy);
                    }
                }
            }
            if completion.len() == defined.len() {
                break;
            }
            defined = completion;
        }

        debug!(entries = defined.len(), "strategy registry built");
        Registry {
            strategies: defined,
        }
    }

    #[must_use]
    pub fn get(&self, id: &TypeId) -> Option<Strategy> {
        self.strategies.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &TypeId) -> bool {
        self.strategies.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeId, Strategy)> {
        self.strategies.iter().map(|(id, s)| (id, *s))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeInfo;

    #[test]
    fn test_seeds_only_without_graph() {
        let registry = Registry::build(&TypeGraph::new());
        assert_eq!(registry.len(), Registry::seeds().len());
        assert_eq!(registry.get(&TypeId::INT), registry.get(&TypeId::INTEGER));
    }

    #[test]
    fn test_closure_reaches_transitive_ancestors() {
        let registry = Registry::build(&TypeGraph::standard());
        assert_eq!(registry.get(&TypeId::ITERABLE), Some(Strategy::Set));
        assert_eq!(registry.get(&TypeId::CHAR_SEQUENCE), Some(Strategy::Text));
        assert_eq!(registry.get(&TypeId::OBJECT), Some(Strategy::Text));
        assert!(registry.contains(&TypeId::COMPARABLE));
    }

    #[test]
    fn test_first_discovered_wins() {
        let mut graph = TypeGraph::new();
        graph
            .declare(TypeId::LONG_OBJ, TypeInfo::class(Some("Shared".into()), Vec::new()))
            .declare(TypeId::INTEGER, TypeInfo::class(Some("Shared".into()), Vec::new()));
        let registry = Registry::build(&graph);
        assert_eq!(registry.get(&TypeId::new("Shared")), Some(Strategy::Int));
    }

    #[test]
    fn test_closure_terminates_on_cycles() {
        let mut graph = TypeGraph::new();
        graph
            .declare(TypeId::LIST, TypeInfo::interface(vec!["A".into()]))
            .declare("A", TypeInfo::interface(vec!["B".into()]))
            .declare("B", TypeInfo::interface(vec!["A".into(), TypeId::LIST]));
        let registry = Registry::build(&graph);
        assert_eq!(registry.get(&TypeId::new("B")), Some(Strategy::List));
    }

    #[test]
    fn test_parse_bool_is_strict() {
        assert_eq!(parse_bool(" TRUE ").unwrap(), true);
        assert_eq!(parse_bool("False").unwrap(), false);
        assert_eq!(parse_bool("yes"), Err(Error::invalid_boolean("yes")));
    }

    #[test]
    fn test_numbers_are_plain_decimal() {
        assert_eq!(parse_int(" -12 ").unwrap(), -12);
        assert_eq!(parse_long("4294967296").unwrap(), 4_294_967_296);
        for text in ["+5", "", "-", "1.0", "0x10"] {
            assert_eq!(parse_int(text), Err(Error::number_format(text.trim(), TypeId::INT)));
            assert_eq!(parse_long(text), Err(Error::number_format(text.trim(), TypeId::LONG)));
        }

        let converter = crate::Converter::default();
        let double = TypeDescriptor::scalar(TypeId::DOUBLE);
        assert_eq!(converter.convert("-0.5", &double).unwrap(), Value::Double(-0.5));
        assert_eq!(converter.convert("3", &double).unwrap(), Value::Double(3.0));
        for text in ["1e5", ".5", "5.", "+1.0", "inf", "NaN", "1.2.3"] {
            assert_eq!(
                converter.convert(text, &double),
                Err(Error::number_format(text, TypeId::DOUBLE))
            );
        }
    }
}
