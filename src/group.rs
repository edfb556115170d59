use std::borrow::Cow;
use std::marker::PhantomData;

use crate::convert::Convert;
use crate::error::ParseError;
use crate::model::Flag;

/// A flag spelling bound to a typed payload sequence `P`.
///
/// `P` is any [`Convert`] type — typically a tuple of leaf types, possibly
/// containing [`AnyOrder`](crate::AnyOrder) sets or nested groups. A `Group`
/// is plain data; declare it once and reuse it across parses.
///
/// ### Example
/// ```
/// use argot::{Flag, Group};
/// use std::path::PathBuf;
///
/// const COPY: Group<(PathBuf, PathBuf)> =
///     Group::new(Flag::new("--copy", "-c", "Copy a file between two paths."));
///
/// let tokens: Vec<String> = ["--copy", "/tmp/from", "/tmp/to"]
///     .iter()
///     .map(|token| token.to_string())
///     .collect();
/// let (from, to) = COPY.parse(&tokens).unwrap();
/// assert_eq!(from, PathBuf::from("/tmp/from"));
/// assert_eq!(to, PathBuf::from("/tmp/to"));
/// ```
///
/// A group can serve as a value type of an enclosing group, which is the
/// composition mechanism for sub-parsers: implement [`Convert`] for a wrapper
/// type by delegating to [`Group::matches`].
///
/// ```
/// use argot::{Convert, Flag, Group, ParseError};
/// use std::borrow::Cow;
///
/// const TAG: Group<(String,)> = Group::new(Flag::new("--tag", "-t", "Label the entry."));
///
/// struct Tag(String);
///
/// impl Convert for Tag {
///     fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
///         let ((label,), remaining) = TAG.matches(tokens)?;
///         Ok((Tag(label), remaining))
///     }
///
///     fn name() -> Cow<'static, str> {
///         Cow::Borrowed(TAG.flag().full())
///     }
/// }
/// ```
pub struct Group<P> {
    flag: Flag,
    _marker: PhantomData<P>,
}

impl<P: Convert> Group<P> {
    /// Bind a flag specification to the payload type `P`.
    pub const fn new(flag: Flag) -> Self {
        Self {
            flag,
            _marker: PhantomData,
        }
    }

    /// The flag specification this group was declared with.
    pub fn flag(&self) -> Flag {
        self.flag
    }

    /// Recognize the leading flag token and convert the payload against the
    /// tail, returning the values and the leftover tokens.
    ///
    /// An unrecognized leading token is a cheap
    /// [`ParseError::FlagNotRecognized`] rejection; payload failures carry
    /// the flag name as chained context.
    pub fn matches<'t>(&self, tokens: &'t [String]) -> Result<(P, &'t [String]), ParseError> {
        match tokens.first() {
            Some(token) if self.flag.recognizes(token) => P::convert(&tokens[1..])
                .map_err(|error| error.chain(format!("parsing flag {} failed", self.flag.full()))),
            Some(token) => Err(ParseError::FlagNotRecognized(token.clone())),
            None => Err(ParseError::EmptyArguments),
        }
    }

    /// Match, convert, and require that every token was consumed.
    ///
    /// This is the standalone entry point for a single declared group; use
    /// [`GroupParser`](crate::GroupParser) to select between several.
    pub fn parse(&self, tokens: &[String]) -> Result<P, ParseError> {
        let (values, remaining) = self.matches(tokens)?;
        ensure_no_remaining_arguments(remaining)?;
        Ok(values)
    }

    pub(crate) fn type_names(&self) -> Cow<'static, str> {
        P::name()
    }
}

/// The final acceptance gate after a successful parse: any unconsumed token
/// is a hard [`ParseError::TrailingArguments`] naming the first leftover.
pub fn ensure_no_remaining_arguments(remaining: &[String]) -> Result<(), ParseError> {
    match remaining.first() {
        Some(token) => Err(ParseError::TrailingArguments(token.clone())),
        None => Ok(()),
    }
}
