//! Literal Syntax
//!
//! This module documents the text accepted by [`convert`](crate::convert) and
//! produced by [`convert_to_string`](crate::convert_to_string).
//!
//! # Scalars
//!
//! | Type | Identities | Syntax | Example |
//! |------|------------|--------|---------|
//! | Text | `String` (and ancestors such as `CharSequence`) | verbatim, not trimmed | `node-1` |
//! | Integer | `int`, `Integer` | `-?[0-9]+`, surrounding whitespace ignored, no `+` sign | `42` |
//! | Long | `long`, `Long` | as integer, 64-bit | `4294967296` |
//! | Boolean | `boolean`, `Boolean` | `true` / `false`, any case | `TRUE` |
//! | Double | `double`, `Double` | `-?[0-9]+(.[0-9]+)?`, no exponent, `inf` or `NaN` | `0.75` |
//! | Enum | declared with [`TypeGraph::declare_enum`](crate::TypeGraph::declare_enum) | exact member name, whitespace ignored | `RED` |
//!
//! Anything else for a boolean is an error rather than `false`.
//!
//! # Collections
//!
//! `Set<E>`, `List<E>` (and their ancestors `Collection`, `Iterable`) and
//! arrays `E[]` share one syntax:
//!
//! ```text
//! [ e1, e2, e3 ]
//! e1, e2, e3
//! ```
//!
//! - One pair of brackets around the whole literal is optional
//! - Elements are separated by `,` with any surrounding whitespace
//! - An element may itself be a bracketed literal, converted with the element
//!   type: `[ [a, b], [c] ]` is a `List<List<String>>` of two lists
//! - Whitespace inside a text element is kept, whitespace next to separators
//!   is not
//! - A `Set` keeps the first occurrence of each element, in literal order
//!
//! Every `[` must be closed; a stray `]` or an unclosed `[` is an error.
//!
//! # Integer Sequences
//!
//! When the element type is an integer kind the collection is flat and
//! supports ranges:
//!
//! ```text
//! 1, 3..5, 9        ->  [ 1, 3, 4, 5, 9 ]
//! [ -2..1 ]         ->  [ -2, -1, 0, 1 ]
//! 1..3..5           ->  [ 1, 2, 3, 2, 3, 4, 5 ]
//! ```
//!
//! **Rules**:
//! - `a..b` appends every integer greater than `a` up to and including `b`
//!   after `a` itself; if `b <= a` nothing is added
//! - A range starts from the last plain number, never from a previous range
//!   end: `1..3..5` repeats `2, 3`
//! - Every `,` and `..` must follow a number: `..5`, `1,,2`, `1,..,2` and
//!   `1,` are errors
//! - Sub-collections are not allowed
//!
//! # Rendering
//!
//! Collections render as `[ e1, e2 ]` with nested collections as nested
//! bracket groups; an empty collection renders as `[  ]`. Doubles always carry
//! a fractional part (`2.0`). Rendering is best effort, not an exact inverse of
//! conversion. Ranges render enumerated, and text is written without escaping,
//! so these do not convert back to an equal value:
//!
//! - text containing `,`, `[` or `]`: `a,b` splits into two elements and `x]`
//!   unbalances the brackets
//! - text with leading or trailing whitespace inside a collection, which is
//!   trimmed on the way back

// This module contains only documentation; no implementation code
