//! Module: config
//!
//! Purpose: Compile-time configuration for RustMemConsole.
//!
//! Architecture:
//! - Console limits and strings are constants, fixed at build time
//! - `platform`: SoC id table resolving the UART register set at startup
//! - `ConsoleConfig`: the few knobs the binary may choose per build
//!
//! Nothing is read from files or the environment on the target.

pub mod platform;

pub use platform::{detect, lookup, Platform, RegisterSet, DEFAULT_UART_BASE, PLATFORMS, SOC_ID_ADDR};

use log::LevelFilter;

/// Maximum command line length in bytes (excluding terminator).
pub const MAX_CMD_LEN: usize = 100;

/// Maximum number of tokens per line, command name included.
pub const MAX_ARGS: usize = 3;

/// Prompt printed before each line read.
pub const PROMPT: &str = "> ";

/// Greeting printed once at startup.
pub const GREETING: &str = "Hello from AArch64!";

/// Width of every printed address and value.
pub const HEX_DIGITS: usize = 8;

/// Word size in bytes; addresses must be a multiple of this.
pub const WORD_SIZE: u32 = 4;

/// Per-build console options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Print greeting and version before the first prompt.
    pub banner: bool,
    /// Level filter handed to the installed logger.
    pub log_level: LevelFilter,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: true,
            log_level: if cfg!(feature = "uart-log") {
                LevelFilter::Debug
            } else {
                LevelFilter::Off
            },
        }
    }
}
