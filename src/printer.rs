use std::borrow::Cow;
use terminal_size::{terminal_size, Width};

use crate::error::ParseError;
use crate::model::Flag;

/// Output seam for help text and top-level error reporting.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}

/// One candidate group's help material.
pub(crate) struct HelpEntry {
    pub(crate) flag: Flag,
    pub(crate) type_names: Cow<'static, str>,
}

/// Renders help text for the declared candidate groups, in declared order.
///
/// Rendering is pure formatting: it never touches parser state, so repeated
/// invocations produce identical output.
pub(crate) struct Printer {
    entries: Vec<HelpEntry>,
    terminal_width: Option<usize>,
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_WRAP_WIDTH: usize = 17;

impl Printer {
    pub(crate) fn terminal(entries: Vec<HelpEntry>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(entries, terminal_width)
    }

    pub(crate) fn new(entries: Vec<HelpEntry>, terminal_width: Option<usize>) -> Self {
        Self {
            entries,
            terminal_width,
        }
    }

    /// Emit, for each candidate group: the flag spellings and value-type
    /// names on one line, the description (wrapped to the terminal width when
    /// known), and a blank separator.
    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for HelpEntry { flag, type_names } in &self.entries {
            if type_names.is_empty() {
                user_interface.print(format!("{}, {}", flag.full(), flag.short()));
            } else {
                user_interface.print(format!("{}, {} {}", flag.full(), flag.short(), type_names));
            }

            match self.terminal_width {
                Some(width) => {
                    for line in chunk(flag.description(), std::cmp::max(width, MINIMUM_WRAP_WIDTH))
                    {
                        user_interface.print(line);
                    }
                }
                None => user_interface.print(flag.description().to_string()),
            }

            user_interface.print(String::default());
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            split_long(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            split_long(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn split_long(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let mut rest = word;

    while rest.len() > width && rest.is_char_boundary(width) {
        let (head, tail) = rest.split_at(width);
        lines.push(head.to_string());
        rest = tail;
    }

    current.push_str(rest);
}

#[cfg(test)]
pub(crate) mod util {
    use super::UserInterface;
    use crate::error::ParseError;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, error: ParseError) {
            self.errors.borrow_mut().push(error.to_string());
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (String, Vec<String>) {
            let InMemoryInterface { messages, errors } = self;
            (messages.take().join("\n"), errors.take())
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, errors) = self.consume();
            assert_eq!(errors, Vec::<String>::new());
            message
        }
    }
}
