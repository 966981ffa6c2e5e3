//! Typed values produced by conversion.
//!
//! This module provides the [`Value`] enum: the result of converting a literal
//! against a [`TypeDescriptor`](crate::TypeDescriptor). Its [`Display`](std::fmt::Display)
//! implementation is the rendering half of the converter: collections render as
//! `[ e1, e2 ]`, scalars in their natural text form.
//!
//! ## Examples
//!
//! ```rust
//! use conf_literal::Value;
//!
//! let list = Value::List(vec![Value::from(1), Value::from(2)]);
//! assert_eq!(list.to_string(), "[ 1, 2 ]");
//! assert_eq!(Value::from(2.0).to_string(), "2.0");
//! ```
//!
//! ## Equality
//!
//! `Value` is `Eq + Hash` so that it can live inside a [`Value::Set`]. Doubles
//! compare by bit pattern (`NaN` equals itself, `0.0` differs from `-0.0`) and
//! sets compare regardless of order.

use crate::TypeId;
use indexmap::IndexSet;
use serde::{Serialize, Serializer};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A converted configuration value.
#[derive(Clone, Debug)]
pub enum Value {
    Text(String),
    Int(i32),
    Long(i64),
    Bool(bool),
    Double(f64),
    Enum { ty: TypeId, member: String },
    /// Ordered sequence, duplicates kept
    List(Vec<Value>),
    /// Unique elements in first-occurrence order
    Set(IndexSet<Value>),
    /// Fixed-length array
    Array(Box<[Value]>),
}

impl Value {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Enum { member, .. } => Some(member),
            _ => None,
        }
    }

    /// If the value is an `Int` or `Long`, returns it widened to `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::Value;
    ///
    /// assert_eq!(Value::Int(7).as_i64(), Some(7));
    /// assert_eq!(Value::Long(-3).as_i64(), Some(-3));
    /// assert_eq!(Value::Bool(true).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i64::from(*i)),
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Int(i) => Some(f64::from(*i)),
            Value::Long(l) => Some(*l as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Number of elements if this is a collection.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Set(items) => Some(items.len()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Iterates the elements of a collection in order; empty for scalars.
    pub fn elements(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Value::List(items) => Box::new(items.iter()),
            Value::Set(items) => Box::new(items.iter()),
            Value::Array(items) => Box::new(items.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }
}

fn write_double(f: &mut fmt::Formatter<'_>, d: f64) -> fmt::Result {
    if d.is_finite() && d.fract() == 0.0 {
        write!(f, "{:.1}", d)
    } else {
        write!(f, "{}", d)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Long(l) => write!(f, "{}", l),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Double(d) => write_double(f, *d),
            Value::Enum { member, .. } => f.write_str(member),
            Value::List(_) | Value::Set(_) | Value::Array(_) => {
                f.write_str("[ ")?;
                for (i, element) in self.elements().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str(" ]")
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (
                Value::Enum { ty: ta, member: ma },
                Value::Enum { ty: tb, member: mb },
            ) => ta == tb && ma == mb,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Text(s) => s.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Long(l) => l.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Double(d) => d.to_bits().hash(state),
            Value::Enum { ty, member } => {
                ty.hash(state);
                member.hash(state);
            }
            Value::List(items) => items.hash(state),
            Value::Array(items) => items.hash(state),
            Value::Set(items) => {
                // order-independent, consistent with set equality
                let sum = items.iter().fold(0u64, |acc, item| {
                    let mut hasher = DefaultHasher::new();
                    item.hash(&mut hasher);
                    acc.wrapping_add(hasher.finish())
                });
                items.len().hash(state);
                sum.hash(state);
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i32(*i),
            Value::Long(l) => serializer.serialize_i64(*l),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Enum { member, .. } => serializer.serialize_str(member),
            Value::List(_) | Value::Set(_) | Value::Array(_) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(self.len())?;
                for element in self.elements() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
