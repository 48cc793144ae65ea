//! `log` output on the console UART.
//!
//! Records are written synchronously, byte by byte, through the same polled
//! driver as the console. They interleave with console output, so the level
//! filter defaults to `Off` (see [`ConsoleConfig`](crate::config::ConsoleConfig)).

use core::fmt::Write;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::RegisterSet;
use crate::hal::{RawBus, SerialPort, Uart};

/// Longest formatted record; the tail is cut.
pub const MAX_RECORD_LEN: usize = 160;

/// Format a record into `buf`.
///
/// Format: `[LEVEL] target: message\n`
pub fn format_record(record: &Record<'_>, buf: &mut [u8]) -> usize {
    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl Write for BufWriter<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = writeln!(writer, "[{}] {}: {}", record.level(), record.target(), record.args());
    writer.pos
}

/// Logger writing to a UART reached through physical memory.
pub struct UartLogger {
    thr: AtomicU32,
    lsr: AtomicU32,
    attached: AtomicBool,
}

impl UartLogger {
    /// Detached logger; drops every record until [`attach`](Self::attach).
    pub const fn new() -> Self {
        Self {
            thr: AtomicU32::new(0),
            lsr: AtomicU32::new(0),
            attached: AtomicBool::new(false),
        }
    }

    /// Point the logger at a UART.
    ///
    /// # Safety
    ///
    /// Records are then written with [`RawBus`]; see [`RawBus::new`].
    pub unsafe fn attach(&self, regs: RegisterSet) {
        self.thr.store(regs.thr, Ordering::Relaxed);
        self.lsr.store(regs.lsr, Ordering::Relaxed);
        self.attached.store(true, Ordering::Release);
    }

    fn registers(&self) -> RegisterSet {
        let thr = self.thr.load(Ordering::Relaxed);
        RegisterSet {
            rbr: thr,
            thr,
            lsr: self.lsr.load(Ordering::Relaxed),
        }
    }
}

impl Default for UartLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for UartLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.attached.load(Ordering::Acquire) && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut buf = [0u8; MAX_RECORD_LEN];
        let len = format_record(record, &mut buf);

        // SAFETY: only reachable after `attach`, whose caller vouched for RawBus.
        let mut uart = Uart::new(unsafe { RawBus::new() }, self.registers());
        for &b in &buf[..len] {
            uart.transmit_byte(b);
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger with `level`.
///
/// # Safety
///
/// Same contract as [`UartLogger::attach`].
pub unsafe fn init(
    logger: &'static UartLogger,
    regs: RegisterSet,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    logger.attach(regs);
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
