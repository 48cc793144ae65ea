//! Line editor for console input
//!
//! Byte-at-a-time state machine: echoes what it keeps, erases on backspace,
//! swallows cursor and paging escape sequences, and shows any other escape
//! sequence as `^[`-prefixed text so it can be diagnosed.

use crate::config::MAX_CMD_LEN;
use crate::hal::SerialPort;

const ESC: u8 = 0x1b;
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Escape sequence state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    Normal,
    /// Got ESC
    Esc,
    /// Got ESC [
    EscBracket,
    /// Got ESC O
    EscO,
    /// Got ESC [ 1-6, one more byte to swallow
    PagingTail,
}

/// Fixed-capacity command line with escape handling.
pub struct LineEditor {
    buf: [u8; MAX_CMD_LEN],
    len: usize,
    state: EscapeState,
}

impl LineEditor {
    /// Create empty editor
    pub const fn new() -> Self {
        Self {
            buf: [0u8; MAX_CMD_LEN],
            len: 0,
            state: EscapeState::Normal,
        }
    }

    /// Process one input byte, echoing to `port`.
    ///
    /// Returns `true` once carriage return completes the line. The line stays
    /// readable through [`as_str`](Self::as_str) until the next [`clear`](Self::clear).
    pub fn feed<P: SerialPort + ?Sized>(&mut self, byte: u8, port: &mut P) -> bool {
        match self.state {
            EscapeState::Normal => return self.feed_normal(byte, port),
            EscapeState::Esc => {
                self.state = match byte {
                    b'[' => EscapeState::EscBracket,
                    b'O' => EscapeState::EscO,
                    _ => {
                        port.print("^[");
                        port.transmit_byte(byte);
                        EscapeState::Normal
                    }
                };
            }
            EscapeState::EscBracket => {
                self.state = match byte {
                    // Arrow keys
                    b'A'..=b'D' => {
                        log::trace!("absorbed ESC [ {}", char::from(byte));
                        EscapeState::Normal
                    }
                    // Home/Insert/Delete/End/PgUp/PgDn
                    b'1'..=b'6' => EscapeState::PagingTail,
                    _ => {
                        port.print("^[[");
                        port.transmit_byte(byte);
                        EscapeState::Normal
                    }
                };
            }
            EscapeState::PagingTail => {
                // Terminator is not checked.
                self.state = EscapeState::Normal;
            }
            EscapeState::EscO => {
                if byte != b'F' {
                    port.print("^[O");
                    port.transmit_byte(byte);
                }
                self.state = EscapeState::Normal;
            }
        }
        false
    }

    fn feed_normal<P: SerialPort + ?Sized>(&mut self, byte: u8, port: &mut P) -> bool {
        match byte {
            b'\r' => return true,
            BACKSPACE | DELETE => {
                if self.len > 0 {
                    self.len -= 1;
                    port.print("\x08 \x08");
                }
            }
            ESC => self.state = EscapeState::Esc,
            b'\t' | 0x20..=0x7e => {
                // Silently dropped once full.
                if self.len < MAX_CMD_LEN {
                    self.buf[self.len] = byte;
                    self.len += 1;
                    port.transmit_byte(byte);
                }
            }
            _ => {}
        }
        false
    }

    /// Block on `port` until a full line has been entered.
    pub fn read_line<P: SerialPort + ?Sized>(&mut self, port: &mut P) -> &str {
        self.clear();
        loop {
            let byte = port.receive_byte();
            if self.feed(byte, port) {
                return self.as_str();
            }
        }
    }

    /// Drop the buffered line and any partial escape sequence.
    pub fn clear(&mut self) {
        self.len = 0;
        self.state = EscapeState::Normal;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current escape state
    pub fn state(&self) -> EscapeState {
        self.state
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
