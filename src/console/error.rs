//! Console error types

use core::fmt::Write;

use thiserror::Error;

use super::hex::HexError;

/// Result code of a successful command.
pub const CODE_OK: i32 = 0;

/// Result code of any failed command.
pub const CODE_FAILED: i32 = -1;

/// Why a command line did not run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError<'a> {
    /// Nothing but delimiters on the line. Reported silently.
    #[error("empty line")]
    EmptyLine,
    /// Command name not in the table.
    #[error("Unknown command: {0}")]
    UnknownCommand(&'a str),
    /// Handler needs more arguments; `usage` is printed after the message.
    #[error("Too few arguments.")]
    TooFewArguments { usage: &'static str },
    /// Address or value token rejected.
    #[error(transparent)]
    Hex(#[from] HexError),
    /// Address not a multiple of the word size.
    #[error("address must be 4-byte aligned.")]
    Misaligned(u32),
}

impl ConsoleError<'_> {
    /// Legacy integer result code.
    pub fn code(&self) -> i32 {
        CODE_FAILED
    }

    /// Whether the error is reported without any output.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::EmptyLine)
    }

    /// Usage text to follow the message, if any.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            Self::TooFewArguments { usage } => Some(usage),
            _ => None,
        }
    }
}

/// Print `err` the way the console shows failures.
pub fn report(err: &ConsoleError<'_>, out: &mut dyn Write) {
    if err.is_silent() {
        return;
    }
    let _ = writeln!(out, "Error: {}", err);
    if let Some(usage) = err.usage() {
        let _ = out.write_str(usage);
    }
}

/// Map a command result onto the legacy integer code.
pub fn result_code(result: &Result<(), ConsoleError<'_>>) -> i32 {
    match result {
        Ok(()) => CODE_OK,
        Err(e) => e.code(),
    }
}
