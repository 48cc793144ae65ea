//! Serial console for inspecting and patching memory
//!
//! Polled, single-threaded, no interrupts.
//! Zero heap allocation - all static buffers.

pub mod commands;
pub mod console;
pub mod error;
pub mod hex;
pub mod line_editor;
pub mod parser;

pub use commands::{command_names, execute, find, CommandContext, CommandDescriptor, COMMANDS};
pub use console::{Console, VERSION};
pub use error::{report, result_code, ConsoleError, CODE_FAILED, CODE_OK};
pub use hex::HexError;
pub use line_editor::{EscapeState, LineEditor};
pub use parser::{parse_line, Args};
