use std::borrow::Cow;
use std::env;

use crate::convert::Convert;
use crate::error::ParseError;
use crate::group::{ensure_no_remaining_arguments, Group};
use crate::model::Flag;
use crate::printer::{ConsoleInterface, HelpEntry, Printer, UserInterface};

struct Candidate<R> {
    flag: Flag,
    type_names: Cow<'static, str>,
    run: Box<dyn Fn(&[String]) -> Result<(R, &[String]), ParseError>>,
}

/// Selects between declared candidate groups by trying each against the
/// arguments in declaration order.
///
/// The first candidate whose flag is recognized *and* whose payload converts
/// wins; its values are mapped into the caller's result type `R` and any
/// leftover tokens become a hard [`ParseError::TrailingArguments`]. When no
/// candidate succeeds, the per-candidate failures are aggregated into
/// [`ParseError::NoCandidateMatched`].
///
/// ### Example
/// ```
/// use argot::{Flag, Group, GroupParser};
/// use std::path::PathBuf;
///
/// enum Command {
///     Copy(PathBuf, PathBuf),
///     Remove(PathBuf),
/// }
///
/// const COPY: Group<(PathBuf, PathBuf)> =
///     Group::new(Flag::new("--copy", "-c", "Copy a file between two paths."));
/// const REMOVE: Group<(PathBuf,)> =
///     Group::new(Flag::new("--remove", "-r", "Remove a file."));
///
/// let parser = GroupParser::new()
///     .candidate(COPY, |(from, to)| Command::Copy(from, to))
///     .candidate(REMOVE, |(path,)| Command::Remove(path));
///
/// let tokens: Vec<String> = ["--remove", "/tmp/stale"]
///     .iter()
///     .map(|token| token.to_string())
///     .collect();
/// let command = parser.parse_tokens(&tokens).unwrap();
/// assert!(matches!(command, Command::Remove(_)));
/// ```
pub struct GroupParser<R> {
    candidates: Vec<Candidate<R>>,
}

impl<R> Default for GroupParser<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GroupParser<R> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::default(),
        }
    }

    /// Declare a candidate group and the mapping from its payload values into
    /// the caller's result type.
    ///
    /// Declaration order is priority order: earlier candidates are tried
    /// first.
    pub fn candidate<P, F>(mut self, group: Group<P>, into: F) -> Self
    where
        P: Convert + 'static,
        F: Fn(P) -> R + 'static,
    {
        let flag = group.flag();
        let type_names = group.type_names();
        self.candidates.push(Candidate {
            flag,
            type_names,
            run: Box::new(move |tokens: &[String]| {
                let (values, remaining) = group.matches(tokens)?;
                Ok((into(values), remaining))
            }),
        });
        self
    }

    /// Try the candidates in declaration order against the tokens.
    ///
    /// A candidate failure falls through to the next candidate; a success is
    /// final, and leftover tokens after the winner fail the whole parse
    /// rather than re-entering the selection.
    pub fn parse_tokens(&self, tokens: &[String]) -> Result<R, ParseError> {
        let mut failures = Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            match (candidate.run)(tokens) {
                Ok((result, remaining)) => {
                    ensure_no_remaining_arguments(remaining)?;
                    return Ok(result);
                }
                Err(error) => {
                    #[cfg(feature = "tracing_debug")]
                    tracing::debug!("candidate {} failed: {error}", candidate.flag.full());
                    failures.push(error);
                }
            }
        }

        Err(ParseError::NoCandidateMatched(failures))
    }

    /// Parse the process arguments (program name excluded).
    pub fn parse_args(&self) -> Result<R, ParseError> {
        let tokens: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(&tokens)
    }

    /// Parse the process arguments, printing the error and exiting the
    /// process with status `1` on failure.
    pub fn parse(&self) -> R {
        match self.parse_args() {
            Ok(result) => result,
            Err(error) => {
                let interface = ConsoleInterface::default();
                interface.print_error(error);
                std::process::exit(1);
            }
        }
    }

    /// Print help text for every declared candidate, in declaration order.
    pub fn display_help(&self) {
        self.print_help(&ConsoleInterface::default());
    }

    pub(crate) fn print_help(&self, user_interface: &impl UserInterface) {
        let entries = self
            .candidates
            .iter()
            .map(|candidate| HelpEntry {
                flag: candidate.flag,
                type_names: candidate.type_names.clone(),
            })
            .collect();
        Printer::terminal(entries).print_help(user_interface);
    }
}
