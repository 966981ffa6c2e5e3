//! Typed extraction of converted values.
//!
//! [`from_value`] feeds a [`Value`] through serde so callers can receive plain
//! Rust types (`Vec<u16>`, `HashSet<String>`, their own enums) instead of
//! matching on [`Value`] variants.
//!
//! ## Usage
//!
//! ```rust
//! use conf_literal::{convert, from_value, ty};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! enum Mode { Fast, Slow }
//!
//! let value = convert("[Fast, Slow, Fast]", &ty!(List(String))).unwrap();
//! let modes: Vec<Mode> = from_value(value).unwrap();
//! assert_eq!(modes, vec![Mode::Fast, Mode::Slow, Mode::Fast]);
//! ```

use crate::{Error, Result, Value};
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializes an instance of `T` from a converted value.
///
/// # Errors
///
/// Returns [`Error::Custom`] if the value's shape does not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Text(s) => visitor.visit_string(s),
            Value::Int(i) => visitor.visit_i32(i),
            Value::Long(l) => visitor.visit_i64(l),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Double(d) => visitor.visit_f64(d),
            Value::Enum { member, .. } => visitor.visit_string(member),
            Value::List(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            Value::Set(items) => visitor.visit_seq(SeqDeserializer::new(items.into_iter().collect())),
            Value::Array(items) => visitor.visit_seq(SeqDeserializer::new(items.into_vec())),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Text(name) | Value::Enum { member: name, .. } => {
                let name: de::value::StringDeserializer<Error> = name.into_deserializer();
                visitor.visit_enum(name)
            }
            other => Err(Error::custom(format!(
                "expected an enum member name, found '{}'",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeSet;

    #[test]
    fn test_scalars() {
        assert_eq!(from_value::<u16>(Value::Int(8080)).unwrap(), 8080);
        assert_eq!(from_value::<bool>(Value::Bool(true)).unwrap(), true);
        assert_eq!(from_value::<f64>(Value::Double(0.5)).unwrap(), 0.5);
        assert_eq!(from_value::<Option<i64>>(Value::Long(3)).unwrap(), Some(3));
    }

    #[test]
    fn test_out_of_range_fails() {
        assert!(matches!(
            from_value::<u8>(Value::Int(300)),
            Err(Error::Custom(_))
        ));
    }

    #[test]
    fn test_collections() {
        let list = Value::from(vec![3, 1, 3]);
        assert_eq!(from_value::<Vec<i32>>(list.clone()).unwrap(), vec![3, 1, 3]);
        assert_eq!(
            from_value::<BTreeSet<i32>>(list).unwrap(),
            [1, 3].into_iter().collect()
        );

        let array = Value::Array(vec![Value::from("a"), Value::from("b")].into_boxed_slice());
        assert_eq!(from_value::<[String; 2]>(array).unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_enum_members() {
        #[derive(Deserialize, Debug, PartialEq)]
        #[serde(rename_all = "UPPERCASE")]
        enum Color {
            Red,
            Green,
        }

        let value = Value::Enum {
            ty: crate::TypeId::new("Color"),
            member: "GREEN".to_string(),
        };
        assert_eq!(from_value::<Color>(value).unwrap(), Color::Green);
        assert!(from_value::<Color>(Value::Int(1)).is_err());
        assert_eq!(from_value::<Color>(Value::from("RED")).unwrap(), Color::Red);
    }
}
