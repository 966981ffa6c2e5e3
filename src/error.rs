//! Error types for literal conversion.
//!
//! Every failure is local and synchronous, and each variant carries the text
//! fragment that caused it so the enclosing configuration loader can point the
//! user at the offending value.
//!
//! ## Error Categories
//!
//! - **Type errors**: no strategy for the requested type, or a generic type
//!   with the wrong number of element types
//! - **Syntax errors**: unbalanced brackets, misplaced `,`/`..` in integer
//!   sequences, values that are not numbers or booleans
//! - **Limit errors**: nesting or range expansion beyond the configured ceilings
//!
//! ## Examples
//!
//! ```rust
//! use conf_literal::{convert, ty, Error};
//!
//! let result = convert("1,2]", &ty!(List(Integer)));
//! assert!(matches!(result, Err(Error::UnbalancedBrackets(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting a literal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No strategy is registered, directly or through closure, for the type
    #[error("Unable to parse '{text}' as type {ty}")]
    UnsupportedType { ty: String, text: String },

    /// A generic collection type must carry exactly one element type
    #[error("Type {ty} expects exactly one element type, found {found}")]
    Arity { ty: String, found: usize },

    /// Text does not name any member of the target enumeration
    #[error("'{text}' is not a member of enum {ty}")]
    UnknownEnumMember { ty: String, text: String },

    /// A `]` without matching `[`, or a `[` never closed
    #[error("Unbalanced brackets in '{0}'")]
    UnbalancedBrackets(String),

    /// Misplaced `,` or `..` in an integer sequence
    #[error("Unexpected '{token}': {text}")]
    UnexpectedToken { token: String, text: String },

    /// A `..` with no number directly before it
    #[error("Cannot generate range: {0}")]
    RangeWithoutStart(String),

    /// A token expected to be numeric is not
    #[error("Invalid number '{token}' for type {ty}")]
    NumberFormat { token: String, ty: String },

    /// A token expected to be `true` or `false` is not
    #[error("Invalid boolean '{0}', expected true or false")]
    InvalidBoolean(String),

    /// Sub-collections nest deeper than the configured limit
    #[error("Nesting deeper than {limit} levels in '{text}'")]
    NestingTooDeep { limit: usize, text: String },

    /// A range segment would synthesize more numbers than allowed
    #[error("Range {start}..{end} expands to more than {limit} values")]
    RangeTooLarge { start: i64, end: i64, limit: usize },

    /// Custom error, raised while extracting typed values
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::Error;
    ///
    /// let err = Error::unsupported_type("Map", "a=b");
    /// assert!(err.to_string().contains("as type Map"));
    /// ```
    pub fn unsupported_type(ty: impl fmt::Display, text: &str) -> Self {
        Error::UnsupportedType {
            ty: ty.to_string(),
            text: text.to_string(),
        }
    }

    /// Creates an arity error for a generic type with `found` element types.
    pub fn arity(ty: impl fmt::Display, found: usize) -> Self {
        Error::Arity {
            ty: ty.to_string(),
            found,
        }
    }

    pub fn unknown_enum_member(ty: impl fmt::Display, text: &str) -> Self {
        Error::UnknownEnumMember {
            ty: ty.to_string(),
            text: text.to_string(),
        }
    }

    pub fn unbalanced(text: &str) -> Self {
        Error::UnbalancedBrackets(text.to_string())
    }

    /// Creates an error for a `,` or `..` found where a number was expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::Error;
    ///
    /// let err = Error::unexpected_token("..", "..5");
    /// assert_eq!(err.to_string(), "Unexpected '..': ..5");
    /// ```
    pub fn unexpected_token(token: &str, text: &str) -> Self {
        Error::UnexpectedToken {
            token: token.to_string(),
            text: text.to_string(),
        }
    }

    pub fn range_without_start(text: &str) -> Self {
        Error::RangeWithoutStart(text.to_string())
    }

    pub fn number_format(token: &str, ty: impl fmt::Display) -> Self {
        Error::NumberFormat {
            token: token.to_string(),
            ty: ty.to_string(),
        }
    }

    pub fn invalid_boolean(token: &str) -> Self {
        Error::InvalidBoolean(token.to_string())
    }

    pub fn nesting_too_deep(limit: usize, text: &str) -> Self {
        Error::NestingTooDeep {
            limit,
            text: text.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
