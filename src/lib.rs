//! # RustMemConsole
//!
//! Bare-metal serial console for peeking and poking 32-bit words.
//!
//! ## Architecture
//!
//! ```text
//! UART ──▶ LineEditor ──▶ parse_line ──▶ execute ──▶ mrw / mww / help
//!   ▲                                                   │
//!   └──────────────────── PortWriter ◀──────────────────┘
//! ```
//!
//! All hardware access goes through [`hal::WordBus`]; the UART registers are
//! resolved once at startup from the SoC id (see [`config::platform`]).

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod hal;
pub mod uart_logger;

pub use config::{ConsoleConfig, Platform, RegisterSet};
pub use console::{Console, ConsoleError, HexError};
pub use hal::{RawBus, SerialPort, Uart, WordBus};
pub use uart_logger::UartLogger;
