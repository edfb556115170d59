//! `argot` is a declarative, type-directed argument group parser.
//!
//! A command line is modelled as a set of candidate *groups*: a flag spelling
//! (`--copy`, `-c`) followed by a typed payload sequence. Parsing is driven
//! entirely by the types: declare the payload as a tuple and the engine
//! converts tokens left-to-right, with [`Option`] for trailing optionals and
//! [`AnyOrder`] for value sets accepted in any cyclic rotation of their
//! declared order.
//!
//! ```
//! use argot::{AnyOrder, Flag, Group, GroupParser};
//! use std::path::PathBuf;
//!
//! #[derive(Debug, PartialEq)]
//! enum Command {
//!     Copy(PathBuf, PathBuf),
//!     Resize(u32, u32),
//! }
//!
//! const COPY: Group<(PathBuf, PathBuf)> =
//!     Group::new(Flag::new("--copy", "-c", "Copy a file between two paths."));
//! const RESIZE: Group<AnyOrder<(u32, u32)>> =
//!     Group::new(Flag::new("--resize", "-s", "Resize to width and height."));
//!
//! let parser = GroupParser::new()
//!     .candidate(COPY, |(from, to)| Command::Copy(from, to))
//!     .candidate(RESIZE, |sized| {
//!         let (width, height) = sized.into_inner();
//!         Command::Resize(width, height)
//!     });
//!
//! let tokens: Vec<String> = ["--resize", "480", "640"]
//!     .iter()
//!     .map(|token| token.to_string())
//!     .collect();
//! assert_eq!(parser.parse_tokens(&tokens).unwrap(), Command::Resize(480, 640));
//! ```
//!
//! Custom leaf types plug in by implementing [`Convert`] (and [`Slot`] to
//! participate in an [`AnyOrder`] set); whole sub-commands compose by
//! delegating a wrapper type's [`Convert`] impl to [`Group::matches`].

mod convert;
mod error;
mod group;
mod model;
mod order;
mod parser;
mod printer;

pub use convert::Convert;
pub use error::ParseError;
pub use group::{ensure_no_remaining_arguments, Group};
pub use model::Flag;
pub use order::{AnyOrder, Slot};
pub use parser::GroupParser;
