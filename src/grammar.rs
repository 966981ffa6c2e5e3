//! The collection literal grammar.
//!
//! A collection literal is a comma separated list of elements, optionally
//! wrapped in one pair of brackets. Elements are either plain tokens or
//! bracketed sub-literals; each is converted with the element type, so a
//! sub-literal becomes a nested collection when the element type is one.
//!
//! ```text
//! [ a, b ]            two elements
//! a, b                the same two elements
//! [ [1, 2], [3] ]     two sub-literals "1, 2" and "3"
//! ```
//!
//! Integer element types take the flat range grammar instead.

use crate::converter::Scope;
use crate::tokenizer::Tokenizer;
use crate::{range, Error, Result, TypeDescriptor, Value};

const DELIMITERS: &[&str] = &[",", "[", "]"];

/// Checks bracket balance over the whole literal and strips one pair of
/// brackets enclosing all of it.
///
/// `"[a], [b]"` is returned unchanged because its first `[` closes before the end.
pub(crate) fn unwrap_brackets(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    let mut depth = 0usize;
    let mut first_close = None;

    for (offset, c) in trimmed.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                if depth == 0 {
                    return Err(Error::unbalanced(text));
                }
                depth -= 1;
                if depth == 0 && first_close.is_none() {
                    first_close = Some(offset);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::unbalanced(text));
    }

    let wrapped = trimmed.starts_with('[') && first_close == Some(trimmed.len() - 1);
    if wrapped {
        Ok(&trimmed[1..trimmed.len() - 1])
    } else {
        Ok(text)
    }
}

/// Parses a collection literal into its elements, in literal order.
pub(crate) fn parse_collection(
    text: &str,
    element: &TypeDescriptor,
    scope: &Scope<'_>,
) -> Result<Vec<Value>> {
    let scope = scope.nested(text)?;
    let body = unwrap_brackets(text)?;

    if element.is_integral() {
        return range::parse_int_sequence(body, element, &scope);
    }

    let mut items = Vec::new();
    let mut buffer = String::new();
    let mut depth = 0usize;

    for token in Tokenizer::new(body, DELIMITERS).return_delimiters(true) {
        match token {
            "[" => {
                if depth == 0 {
                    buffer.clear();
                } else {
                    buffer.push_str(token);
                }
                depth += 1;
            }
            "]" => {
                if depth == 0 {
                    return Err(Error::unbalanced(text));
                }
                depth -= 1;
                if depth > 0 {
                    buffer.push_str(token);
                } else {
                    let inner = std::mem::take(&mut buffer);
                    items.push(scope.convert(&inner, element)?);
                }
            }
            _ if depth > 0 => buffer.push_str(token),
            "," => {}
            _ => {
                let token = token.trim();
                if !token.is_empty() {
                    items.push(scope.convert(token, element)?);
                }
            }
        }
    }

    if depth != 0 {
        return Err(Error::unbalanced(text));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_enclosing_pair() {
        assert_eq!(unwrap_brackets(" [a, b] ").unwrap(), "a, b");
        assert_eq!(unwrap_brackets("[[1], [2]]").unwrap(), "[1], [2]");
        assert_eq!(unwrap_brackets("[a], [b]").unwrap(), "[a], [b]");
        assert_eq!(unwrap_brackets("a, b").unwrap(), "a, b");
        assert_eq!(unwrap_brackets("[]").unwrap(), "");
    }

    #[test]
    fn test_unwrap_detects_imbalance() {
        assert_eq!(unwrap_brackets("[1,2"), Err(Error::unbalanced("[1,2")));
        assert_eq!(unwrap_brackets("1,2]"), Err(Error::unbalanced("1,2]")));
        assert!(unwrap_brackets("][").is_err());
    }
}
