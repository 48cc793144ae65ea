//! Polled UART transport.
//!
//! Blocking byte receive/transmit against a 16550-style register block.
//! There is no timeout: if the line-status bits never come up, the caller
//! spins forever.

use core::fmt;

use super::WordBus;
use crate::config::RegisterSet;

/// LSR: receive data ready.
pub const LSR_DR: u32 = 1 << 0;

/// LSR: transmit holding register empty.
pub const LSR_THRE: u32 = 1 << 5;

/// Byte-oriented serial transport.
pub trait SerialPort {
    /// Block until a byte arrives and return it.
    fn receive_byte(&mut self) -> u8;

    /// Block until the transmitter is free and send `byte`.
    fn transmit_byte(&mut self, byte: u8);

    /// Send every byte of `text`.
    fn print(&mut self, text: &str) {
        for &b in text.as_bytes() {
            self.transmit_byte(b);
        }
    }

    /// Send `text` followed by a line feed.
    fn println(&mut self, text: &str) {
        self.print(text);
        self.transmit_byte(b'\n');
    }
}

impl<P: SerialPort + ?Sized> SerialPort for &mut P {
    fn receive_byte(&mut self) -> u8 {
        (**self).receive_byte()
    }

    fn transmit_byte(&mut self, byte: u8) {
        (**self).transmit_byte(byte)
    }
}

/// UART driver over a word bus.
pub struct Uart<B: WordBus> {
    bus: B,
    regs: RegisterSet,
}

impl<B: WordBus> Uart<B> {
    /// Bind a driver to the registers in `regs`.
    pub fn new(bus: B, regs: RegisterSet) -> Self {
        Self { bus, regs }
    }

    /// Register addresses in use.
    pub fn registers(&self) -> RegisterSet {
        self.regs
    }

    /// Access the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the underlying bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    fn wait_for(&mut self, mask: u32) {
        while self.bus.read_word(self.regs.lsr) & mask == 0 {
            core::hint::spin_loop();
        }
    }
}

impl<B: WordBus> SerialPort for Uart<B> {
    fn receive_byte(&mut self) -> u8 {
        self.wait_for(LSR_DR);
        (self.bus.read_word(self.regs.rbr) & 0xff) as u8
    }

    fn transmit_byte(&mut self, byte: u8) {
        self.wait_for(LSR_THRE);
        // Output is CRLF on the wire.
        if byte == b'\n' {
            self.transmit_byte(b'\r');
        }
        self.bus.write_word(self.regs.thr, u32::from(byte));
    }
}

/// `core::fmt::Write` adapter so handlers can use `write!` on a port.
pub struct PortWriter<'a, P: SerialPort + ?Sized>(pub &'a mut P);

impl<P: SerialPort + ?Sized> fmt::Write for PortWriter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.print(s);
        Ok(())
    }
}
