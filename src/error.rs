use std::borrow::Cow;
use thiserror::Error;

/// The failure conditions of the parsing process.
///
/// Conversion and arity errors are recoverable at well defined points: an
/// [`Option`](crate::Convert#impl-Convert-for-Option<T>) conversion downgrades
/// them to absence, [`AnyOrder`](crate::AnyOrder) responds by trying the next
/// rotation, and [`GroupParser`](crate::GroupParser) responds by trying the
/// next candidate. `TrailingArguments` and `NoCandidateMatched` always
/// propagate to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Not enough tokens remain to satisfy a non-optional value type.
    #[error("missing arguments")]
    MissingArguments,

    /// A token could not be interpreted as the target leaf type.
    #[error("cannot convert '{token}' to a {type_name}")]
    Conversion {
        token: String,
        type_name: Cow<'static, str>,
    },

    /// The leading token matches neither the full nor the short spelling.
    #[error("flag '{0}' not recognized")]
    FlagNotRecognized(String),

    /// A flag match was attempted against an empty token list.
    #[error("could not parse empty arguments")]
    EmptyArguments,

    /// No rotation of a declared unordered set produced a full parse.
    #[error("no rotation of ({type_names}) matches the arguments")]
    PermutationExhausted { type_names: Cow<'static, str> },

    /// Every candidate group failed; carries the per-candidate failures in
    /// declared order.
    #[error("no candidate group matched the arguments")]
    NoCandidateMatched(Vec<ParseError>),

    /// Tokens remain unconsumed after an otherwise successful parse.
    #[error("argument '{0}' not parsed")]
    TrailingArguments(String),

    /// An inner failure wrapped with additional context.
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Wrap this error with additional context, preserving the original as
    /// the source.
    pub(crate) fn chain(self, context: impl Into<String>) -> Self {
        ParseError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Walk the context chain down to the innermost failure.
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
