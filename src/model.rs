use std::fmt;

/// The declared spelling and description identifying one flag group.
///
/// A `Flag` is plain data: construct it once (typically as a `const`) and
/// share it between the parser and the help text.
///
/// ### Example
/// ```
/// use argot::Flag;
///
/// const COPY: Flag = Flag::new("--copy", "-c", "Copy a file between two paths.");
/// assert_eq!(COPY.full(), "--copy");
/// assert_eq!(COPY.short(), "-c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    full: &'static str,
    short: &'static str,
    description: &'static str,
}

impl Flag {
    /// Create a flag specification from its full spelling, short spelling,
    /// and description text.
    pub const fn new(full: &'static str, short: &'static str, description: &'static str) -> Self {
        Self {
            full,
            short,
            description,
        }
    }

    /// The full spelling (ex: `--copy`), also the flag's canonical name.
    pub fn full(&self) -> &'static str {
        self.full
    }

    /// The short spelling (ex: `-c`).
    pub fn short(&self) -> &'static str {
        self.short
    }

    /// The description text displayed by the help renderer.
    pub fn description(&self) -> &'static str {
        self.description
    }

    pub(crate) fn recognizes(&self, token: &str) -> bool {
        token == self.full || token == self.short
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const VERBOSE: Flag = Flag::new("--verbose", "-v", "Print more detail.");

    #[rstest]
    #[case("--verbose", true)]
    #[case("-v", true)]
    #[case("--verbos", false)]
    #[case("-verbose", false)]
    #[case("verbose", false)]
    #[case("", false)]
    fn recognizes(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(VERBOSE.recognizes(token), expected);
    }

    #[test]
    fn accessors() {
        assert_eq!(VERBOSE.full(), "--verbose");
        assert_eq!(VERBOSE.short(), "-v");
        assert_eq!(VERBOSE.description(), "Print more detail.");
        assert_eq!(VERBOSE.to_string(), "--verbose");
    }
}
