//! Validation patterns per type.
//!
//! The surrounding framework shows these patterns as input hints. They are
//! regular expressions describing what the grammar accepts, coarse by intent:
//! conversion never consults them.

use crate::{Converter, TypeDescriptor};

pub const ANY: &str = ".*";
pub const INTEGER: &str = "-?[0-9]+";
pub const BOOLEAN: &str = "[tT][rR][uU][eE]|[fF][aA][lL][sS][eE]";
pub const DOUBLE: &str = r"-?[0-9]+(\.[0-9]+)?";

/// An integer element of a sequence, with an optional `..end` segment.
const INTEGER_SEGMENT: &str = r"-?[0-9]+(\s*\.\.\s*-?[0-9]+)?";

pub(crate) fn derive(converter: &Converter, ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Scalar(id) => {
            if let Some(members) = converter.graph().enum_members(id) {
                return members
                    .iter()
                    .map(|member| regex::escape(member))
                    .collect::<Vec<_>>()
                    .join("|");
            }
            converter
                .registry()
                .get(id)
                .map_or_else(|| ANY.to_string(), |s| s.pattern(None, converter))
        }
        TypeDescriptor::Generic { raw, args } => converter
            .registry()
            .get(raw)
            .map_or_else(|| ANY.to_string(), |s| s.pattern(Some(args.as_slice()), converter)),
        TypeDescriptor::ArrayOf(element) => collection(converter, element),
    }
}

/// Optional brackets around the element pattern repeated with comma separators.
pub(crate) fn collection(converter: &Converter, element: &TypeDescriptor) -> String {
    let element = if element.is_integral() {
        INTEGER_SEGMENT.to_string()
    } else {
        derive(converter, element)
    };
    if element == ANY {
        return element;
    }
    format!(
        r"\[?\s*((?:{e})(\s*,\s*(?:{e}))*)?\s*\]?",
        e = element
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ty, TypeGraph, TypeId};
    use regex::Regex;

    fn full_match(pattern: &str, text: &str) -> bool {
        Regex::new(&format!("^(?:{})$", pattern))
            .unwrap()
            .is_match(text)
    }

    #[test]
    fn test_scalar_patterns() {
        let c = Converter::default();
        assert_eq!(c.allowed_pattern(&ty!(int)), INTEGER);
        assert_eq!(c.allowed_pattern(&ty!(Boolean)), BOOLEAN);
        assert_eq!(c.allowed_pattern(&ty!(String)), ANY);
        assert_eq!(c.allowed_pattern(&ty!(Unknown)), ANY);
        assert_eq!(c.allowed_pattern(&ty!(Map(String, String))), ANY);
    }

    #[test]
    fn test_enum_pattern_escapes_members() {
        let mut graph = TypeGraph::standard();
        graph.declare_enum(TypeId::new("Op"), ["ADD", "A.B"]);
        let c = Converter::with_graph(graph);
        let pattern = c.allowed_pattern(&TypeDescriptor::scalar(TypeId::new("Op")));
        assert_eq!(pattern, r"ADD|A\.B");
        assert!(full_match(&pattern, "A.B"));
        assert!(!full_match(&pattern, "AxB"));
    }

    #[test]
    fn test_collection_patterns_accept_grammar() {
        let c = Converter::default();

        let ints = c.allowed_pattern(&ty!(List(Integer)));
        for text in ["1,3..5,9", "[ 1, 2 ]", "[  ]", "-4 .. -1"] {
            assert!(full_match(&ints, text), "{} should match {}", text, ints);
            assert!(c.convert(text, &ty!(List(Integer))).is_ok());
        }

        let bools = c.allowed_pattern(&ty!(Set(Boolean)));
        assert!(full_match(&bools, "[true, FALSE]"));
        assert!(!full_match(&bools, "[yes]"));

        let nested = c.allowed_pattern(&ty!(List(List(Integer))));
        assert!(full_match(&nested, "[ [1, 2], [3] ]"));

        let doubles = c.allowed_pattern(&ty!([Double]));
        assert!(full_match(&doubles, "[1.5, 2]"));
    }
}
