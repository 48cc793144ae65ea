//! Command line tokenizer
//!
//! Splits on spaces and tabs, at most `MAX_ARGS` tokens (command name
//! included). Anything past the last token slot is ignored.

use crate::config::MAX_ARGS;

/// Tokens of one command line, borrowed from the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args<'a> {
    argc: usize,
    argv: [&'a str; MAX_ARGS],
}

impl<'a> Args<'a> {
    /// No tokens.
    pub const fn empty() -> Self {
        Self {
            argc: 0,
            argv: [""; MAX_ARGS],
        }
    }

    /// Number of tokens, command name included.
    pub fn argc(&self) -> usize {
        self.argc
    }

    /// Token by position (0 is the command name).
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        if idx < self.argc {
            Some(self.argv[idx])
        } else {
            None
        }
    }

    /// The command name, if any.
    pub fn command(&self) -> Option<&'a str> {
        self.get(0)
    }

    /// All tokens in order.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.argv[..self.argc]
    }

    pub fn is_empty(&self) -> bool {
        self.argc == 0
    }
}

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split a completed line into tokens.
pub fn parse_line(line: &str) -> Args<'_> {
    let mut args = Args::empty();
    for token in line.split(is_delimiter).filter(|t| !t.is_empty()).take(MAX_ARGS) {
        args.argv[args.argc] = token;
        args.argc += 1;
    }
    args
}
