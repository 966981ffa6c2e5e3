//! The integer sequence grammar.
//!
//! Integer collections are flat: comma separated numbers where any number may
//! be followed by `..end` to append every integer after it up to and including
//! `end`. The range start stays anchored on the last plain number, so chained
//! ranges restart from it. Brackets never nest here.
//!
//! ```text
//! 1,3..5,9      ->  1 3 4 5 9
//! 1..3..5       ->  1 2 3 2 3 4 5
//! 5..3          ->  5
//! ```

use crate::converter::Scope;
use crate::registry::{parse_int, parse_long};
use crate::tokenizer::Tokenizer;
use crate::{Error, Result, TypeDescriptor, TypeId, Value};

const COMMA: &str = ",";
const RANGE: &str = "..";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    AfterNumber,
    AfterComma,
    AfterRange,
}

#[derive(Clone, Copy, Debug)]
enum Width {
    Int,
    Long,
}

impl Width {
    fn of(element: &TypeDescriptor) -> Self {
        match element.as_scalar() {
            Some(id) if *id == TypeId::LONG || *id == TypeId::LONG_OBJ => Width::Long,
            _ => Width::Int,
        }
    }

    fn parse(self, token: &str) -> Result<i64> {
        match self {
            Width::Int => parse_int(token).map(i64::from),
            Width::Long => parse_long(token),
        }
    }

    fn value(self, n: i64) -> Value {
        match self {
            // only produced from numbers parsed as i32 or ranges between them
            Width::Int => Value::Int(n as i32),
            Width::Long => Value::Long(n),
        }
    }
}

/// Parses `1,3..5,9` style sequences. `text` must already be bracket-unwrapped.
pub(crate) fn parse_int_sequence(
    text: &str,
    element: &TypeDescriptor,
    scope: &Scope<'_>,
) -> Result<Vec<Value>> {
    let width = Width::of(element);
    let limit = scope.options().max_range_len;
    let mut items = Vec::new();
    let mut previous: Option<i64> = None;
    let mut state = State::Start;

    for token in Tokenizer::new(text.trim(), &[COMMA, RANGE]).return_delimiters(true) {
        match token {
            COMMA => {
                if state != State::AfterNumber {
                    return Err(Error::unexpected_token(token, text));
                }
                state = State::AfterComma;
            }
            RANGE => match state {
                State::AfterNumber => state = State::AfterRange,
                State::Start => return Err(Error::unexpected_token(token, text)),
                State::AfterComma | State::AfterRange => {
                    return Err(Error::range_without_start(text))
                }
            },
            _ if token.trim().is_empty() => continue,
            _ => {
                let number = width.parse(token)?;
                match (state, previous) {
                    (State::AfterRange, Some(start)) => {
                        if number > start {
                            let span = number.abs_diff(start);
                            if span > limit as u64 {
                                return Err(Error::RangeTooLarge {
                                    start,
                                    end: number,
                                    limit,
                                });
                            }
                            items.extend((start + 1..=number).map(|n| width.value(n)));
                        }
                    }
                    _ => {
                        items.push(width.value(number));
                        previous = Some(number);
                    }
                }
                state = State::AfterNumber;
            }
        }
    }

    match state {
        State::AfterComma => Err(Error::unexpected_token(COMMA, text)),
        State::AfterRange => Err(Error::unexpected_token(RANGE, text)),
        State::Start | State::AfterNumber => Ok(items),
    }
}

#[cfg(test)]
mod tests {
    use crate::{ty, Converter, ConverterOptions, Error, TypeGraph, Value};

    fn ints(text: &str) -> Result<Vec<i32>, Error> {
        let value = Converter::default().convert(text, &ty!(List(Integer)))?;
        Ok(value.elements().map(|v| v.as_i64().unwrap() as i32).collect())
    }

    #[test]
    fn test_enumeration_and_ranges() {
        assert_eq!(ints("1,3..5,9").unwrap(), vec![1, 3, 4, 5, 9]);
        assert_eq!(ints(" 1 , 3 .. 5 ").unwrap(), vec![1, 3, 4, 5]);
        assert_eq!(ints("-2..1").unwrap(), vec![-2, -1, 0, 1]);
        assert_eq!(ints("1..3..5").unwrap(), vec![1, 2, 3, 2, 3, 4, 5]);
        assert_eq!(ints("2..4,6..7").unwrap(), vec![2, 3, 4, 6, 7]);
        assert_eq!(ints("1..3..0").unwrap(), vec![1, 2, 3]);
        assert_eq!(ints("5..3").unwrap(), vec![5]);
        assert_eq!(ints("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_malformed_sequences() {
        assert_eq!(ints("..5"), Err(Error::unexpected_token("..", "..5")));
        assert_eq!(ints(",1"), Err(Error::unexpected_token(",", ",1")));
        assert_eq!(ints("1,,2"), Err(Error::unexpected_token(",", "1,,2")));
        assert_eq!(ints("1, ,2"), Err(Error::unexpected_token(",", "1, ,2")));
        assert_eq!(ints("1,..,2"), Err(Error::range_without_start("1,..,2")));
        assert_eq!(ints("1,"), Err(Error::unexpected_token(",", "1,")));
        assert_eq!(ints("1.."), Err(Error::unexpected_token("..", "1..")));
        assert_eq!(ints("1,x"), Err(Error::number_format("x", "int")));
    }

    #[test]
    fn test_int_overflow_is_number_format() {
        assert!(matches!(
            ints("2147483648"),
            Err(Error::NumberFormat { .. })
        ));
    }

    #[test]
    fn test_long_elements() {
        let value = Converter::default()
            .convert("4294967296..4294967298", &ty!(List(Long)))
            .unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Long(4_294_967_296),
                Value::Long(4_294_967_297),
                Value::Long(4_294_967_298),
            ])
        );
    }

    #[test]
    fn test_range_limit() {
        let converter = Converter::new(
            TypeGraph::standard(),
            ConverterOptions::new().with_max_range_len(10),
        );
        assert!(converter.convert("0..10", &ty!(List(int))).is_ok());
        assert_eq!(
            converter.convert("0..11", &ty!(List(int))),
            Err(Error::RangeTooLarge {
                start: 0,
                end: 11,
                limit: 10
            })
        );
    }
}
