use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::ParseError;

/// A value type that can consume tokens from the front of the argument list.
///
/// This is the sole extension point for new leaf types beyond the built-in
/// numeric/boolean/string/path/optional set: implement `convert` to consume
/// however many tokens the type needs and return the unconsumed tail, and
/// `name` to give the display name used in help text and error messages.
///
/// Invariant: the returned slice is always a suffix of the input slice, and a
/// failed conversion consumes nothing (the caller still holds the original
/// slice).
///
/// ### Example
/// ```
/// use argot::{Convert, ParseError};
/// use std::borrow::Cow;
///
/// struct Percentage(u8);
///
/// impl Convert for Percentage {
///     fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
///         let (value, remaining) = u8::convert(tokens)?;
///         Ok((Percentage(value.min(100)), remaining))
///     }
///
///     fn name() -> Cow<'static, str> {
///         Cow::Borrowed("percentage")
///     }
/// }
///
/// let tokens = vec!["200".to_string(), "rest".to_string()];
/// let (percentage, remaining) = Percentage::convert(&tokens).unwrap();
/// assert_eq!(percentage.0, 100);
/// assert_eq!(remaining, &["rest".to_string()]);
/// ```
pub trait Convert: Sized {
    /// Consume tokens from the front, producing the value and the unconsumed
    /// tail.
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError>;

    /// The display name used by the help renderer and in error messages.
    fn name() -> Cow<'static, str>;
}

fn take_token(tokens: &[String]) -> Result<(&String, &[String]), ParseError> {
    match tokens.split_first() {
        Some((token, remaining)) => Ok((token, remaining)),
        None => Err(ParseError::MissingArguments),
    }
}

/// Convert one element of a sequence, wrapping any failure with the element's
/// display name.
pub(crate) fn convert_step<T: Convert>(
    tokens: &[String],
) -> Result<(T, &[String]), ParseError> {
    T::convert(tokens)
        .map_err(|error| error.chain(format!("could not convert type {}", T::name())))
}

macro_rules! convert_number {
    ($type:ty) => {
        impl Convert for $type {
            fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
                let (token, remaining) = take_token(tokens)?;
                match token.parse::<$type>() {
                    Ok(value) => Ok((value, remaining)),
                    Err(_) => Err(ParseError::Conversion {
                        token: token.clone(),
                        type_name: Cow::Borrowed(stringify!($type)),
                    }),
                }
            }

            fn name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($type))
            }
        }
    };
}

convert_number!(u8);
convert_number!(u16);
convert_number!(u32);
convert_number!(u64);
convert_number!(i8);
convert_number!(i16);
convert_number!(i32);
convert_number!(i64);
convert_number!(usize);
convert_number!(isize);
convert_number!(f32);
convert_number!(f64);

impl Convert for bool {
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        let (token, remaining) = take_token(tokens)?;
        match token.as_str() {
            "true" | "t" | "yes" | "y" => Ok((true, remaining)),
            "false" | "f" | "no" | "n" => Ok((false, remaining)),
            _ => Err(ParseError::Conversion {
                token: token.clone(),
                type_name: Cow::Borrowed("boolean"),
            }),
        }
    }

    fn name() -> Cow<'static, str> {
        Cow::Borrowed("boolean")
    }
}

impl Convert for String {
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        let (token, remaining) = take_token(tokens)?;
        Ok((token.clone(), remaining))
    }

    fn name() -> Cow<'static, str> {
        Cow::Borrowed("string")
    }
}

impl Convert for PathBuf {
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        let (token, remaining) = take_token(tokens)?;
        Ok((PathBuf::from(token), remaining))
    }

    fn name() -> Cow<'static, str> {
        Cow::Borrowed("path")
    }
}

/// The empty payload: a flag that takes no values.
impl Convert for () {
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        Ok(((), tokens))
    }

    fn name() -> Cow<'static, str> {
        Cow::Borrowed("")
    }
}

impl<T: Convert> Convert for Option<T> {
    /// Attempt `T`; absence (an empty token list or an unconvertible head
    /// token) succeeds with `None` and the original, unconsumed token list.
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        if tokens.is_empty() {
            return Ok((None, tokens));
        }
        match T::convert(tokens) {
            Ok((value, remaining)) => Ok((Some(value), remaining)),
            Err(_) => Ok((None, tokens)),
        }
    }

    fn name() -> Cow<'static, str> {
        Cow::Owned(format!("[{}]", T::name()))
    }
}

impl<T: Convert> Convert for Box<T> {
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        let (value, remaining) = T::convert(tokens)?;
        Ok((Box::new(value), remaining))
    }

    fn name() -> Cow<'static, str> {
        T::name()
    }
}

// Tuples are the sequence parser: left-to-right in declared order, an arity
// error on an empty token list at any non-terminal step, no backtracking.
// The base case performs no empty-check so that a trailing optional element
// can absorb an empty tail.
macro_rules! convert_sequence {
    ($first:ident) => {
        impl<$first: Convert> Convert for ($first,) {
            fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
                let (value, remaining) = convert_step::<$first>(tokens)?;
                Ok(((value,), remaining))
            }

            fn name() -> Cow<'static, str> {
                $first::name()
            }
        }
    };
    ($first:ident $($rest:ident)+) => {
        impl<$first: Convert, $($rest: Convert),+> Convert for ($first, $($rest),+) {
            #[allow(non_snake_case)]
            fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
                if tokens.is_empty() {
                    return Err(ParseError::MissingArguments);
                }
                let ($first, remaining) = convert_step::<$first>(tokens)?;
                let (($($rest,)+), remaining) = <($($rest,)+)>::convert(remaining)?;
                Ok((($first, $($rest),+), remaining))
            }

            fn name() -> Cow<'static, str> {
                Cow::Owned(format!("{}, {}", $first::name(), <($($rest,)+)>::name()))
            }
        }

        convert_sequence!($($rest)+);
    };
}

convert_sequence!(T1 T2 T3 T4 T5 T6 T7 T8);

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    mod numbers {
        use super::*;

        #[test]
        fn success() {
            let input = tokens(&["5", "rest"]);
            let (value, remaining) = u32::convert(&input).unwrap();
            assert_eq!(value, 5);
            assert_eq!(remaining, &input[1..]);
        }

        #[rstest]
        #[case(&["abc"])]
        #[case(&["5x"])]
        #[case(&["-1"])]
        fn failure(#[case] values: &[&str]) {
            let input = tokens(values);
            let error = u32::convert(&input).unwrap_err();
            assert_matches!(error, ParseError::Conversion { ref token, .. } if token == values[0]);
        }

        #[test]
        fn failure_message() {
            let input = tokens(&["abc"]);
            assert_eq!(
                &u32::convert(&input).unwrap_err().to_string(),
                "cannot convert 'abc' to a u32"
            );
        }

        #[test]
        fn signed() {
            let input = tokens(&["-17"]);
            let (value, remaining) = i64::convert(&input).unwrap();
            assert_eq!(value, -17);
            assert!(remaining.is_empty());
        }

        #[test]
        fn float() {
            let input = tokens(&["2.5"]);
            let (value, _) = f64::convert(&input).unwrap();
            assert_eq!(value, 2.5);
        }

        #[test]
        fn missing() {
            let input = tokens(&[]);
            assert_eq!(u32::convert(&input).unwrap_err(), ParseError::MissingArguments);
        }
    }

    mod booleans {
        use super::*;

        #[rstest]
        #[case("true", true)]
        #[case("t", true)]
        #[case("yes", true)]
        #[case("y", true)]
        #[case("false", false)]
        #[case("f", false)]
        #[case("no", false)]
        #[case("n", false)]
        fn success(#[case] token: &str, #[case] expected: bool) {
            let input = tokens(&[token]);
            let (value, remaining) = bool::convert(&input).unwrap();
            assert_eq!(value, expected);
            assert!(remaining.is_empty());
        }

        #[test]
        fn failure() {
            let input = tokens(&["maybe"]);
            assert_eq!(
                &bool::convert(&input).unwrap_err().to_string(),
                "cannot convert 'maybe' to a boolean"
            );
        }
    }

    mod strings {
        use super::*;

        #[test]
        fn verbatim() {
            let input = tokens(&["--weird", "rest"]);
            let (value, remaining) = String::convert(&input).unwrap();
            assert_eq!(&value, "--weird");
            assert_eq!(remaining, &input[1..]);
        }

        #[test]
        fn missing() {
            let input = tokens(&[]);
            assert_eq!(
                String::convert(&input).unwrap_err(),
                ParseError::MissingArguments
            );
        }
    }

    mod paths {
        use super::*;

        #[test]
        fn opaque() {
            let input = tokens(&["/usr/bin/env"]);
            let (value, remaining) = PathBuf::convert(&input).unwrap();
            assert_eq!(value, PathBuf::from("/usr/bin/env"));
            assert!(remaining.is_empty());
        }

        #[test]
        fn name() {
            assert_eq!(&PathBuf::name(), "path");
        }
    }

    mod optionals {
        use super::*;

        #[test]
        fn present() {
            let input = tokens(&["5", "rest"]);
            let (value, remaining) = Option::<u32>::convert(&input).unwrap();
            assert_eq!(value, Some(5));
            assert_eq!(remaining, &input[1..]);
        }

        #[test]
        fn absent_on_failure() {
            // The optional must never consume tokens on failure.
            let input = tokens(&["abc"]);
            let (value, remaining) = Option::<u32>::convert(&input).unwrap();
            assert_eq!(value, None);
            assert_eq!(remaining, input.as_slice());
        }

        #[test]
        fn absent_on_empty() {
            let input = tokens(&[]);
            let (value, remaining) = Option::<u32>::convert(&input).unwrap();
            assert_eq!(value, None);
            assert!(remaining.is_empty());
        }

        #[test]
        fn name() {
            assert_eq!(&Option::<u32>::name(), "[u32]");
        }
    }

    mod sequences {
        use super::*;

        #[test]
        fn in_order() {
            let input = tokens(&["5", "hello"]);
            let ((number, word), remaining) = <(u32, String)>::convert(&input).unwrap();
            assert_eq!(number, 5);
            assert_eq!(&word, "hello");
            assert!(remaining.is_empty());
        }

        #[test]
        fn order_sensitive() {
            let input = tokens(&["notanint", "hello"]);
            let error = <(u32, String)>::convert(&input).unwrap_err();
            assert_matches!(
                error.root_cause(),
                ParseError::Conversion { ref token, .. } if token == "notanint"
            );
        }

        #[test]
        fn leftover_is_suffix() {
            let input = tokens(&["5", "hello", "extra", "more"]);
            let (_, remaining) = <(u32, String)>::convert(&input).unwrap();
            assert_eq!(remaining, &input[2..]);
            assert!(remaining.len() <= input.len());
        }

        #[test]
        fn missing_arguments_midway() {
            let input = tokens(&["5"]);
            let error = <(u32, String)>::convert(&input).unwrap_err();
            assert_eq!(error.root_cause(), &ParseError::MissingArguments);
        }

        #[test]
        fn missing_arguments_upfront() {
            let input = tokens(&[]);
            assert_eq!(
                <(u32, String)>::convert(&input).unwrap_err(),
                ParseError::MissingArguments
            );
        }

        #[test]
        fn trailing_optional_absorbs_empty_tail() {
            let input = tokens(&["hello"]);
            let ((word, number), remaining) =
                <(String, Option<u32>)>::convert(&input).unwrap();
            assert_eq!(&word, "hello");
            assert_eq!(number, None);
            assert!(remaining.is_empty());
        }

        #[test]
        fn chained_context() {
            let input = tokens(&["abc", "hello"]);
            let error = <(u32, String)>::convert(&input).unwrap_err();
            assert_eq!(
                &error.to_string(),
                "could not convert type u32: cannot convert 'abc' to a u32"
            );
        }

        #[test]
        fn nested_tuples() {
            let input = tokens(&["1", "2", "3", "rest"]);
            let ((a, (b, c)), remaining) = <(u32, (u32, u32))>::convert(&input).unwrap();
            assert_eq!((a, b, c), (1, 2, 3));
            assert_eq!(remaining, &input[3..]);
        }

        #[test]
        fn names_comma_joined() {
            assert_eq!(&<(u32, String, PathBuf)>::name(), "u32, string, path");
            assert_eq!(&<(String,)>::name(), "string");
        }
    }
}
