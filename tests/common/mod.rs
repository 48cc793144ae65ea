//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use rust_mem_console::config::RegisterSet;
use rust_mem_console::console::{result_code, Console};
use rust_mem_console::hal::uart::{LSR_DR, LSR_THRE};
use rust_mem_console::{SerialPort, Uart, WordBus};

/// UART base used by every fake.
pub const UART_BASE: u32 = 0x1100_2000;

pub fn regs() -> RegisterSet {
    RegisterSet::from_base(UART_BASE)
}

/// 16550-style register block with scripted input.
///
/// Panics instead of spinning when the script runs dry.
#[derive(Default)]
pub struct FakeUart {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
    /// LSR reads that report "not ready" before the bits come up.
    pub busy_polls: usize,
    pub lsr_reads: usize,
    idle_polls: usize,
}

impl FakeUart {
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl WordBus for FakeUart {
    fn read_word(&mut self, addr: u32) -> u32 {
        let regs = regs();
        if addr == regs.lsr {
            self.lsr_reads += 1;
            if self.busy_polls > 0 {
                self.busy_polls -= 1;
                return 0;
            }
            if self.input.is_empty() {
                // Only a receive keeps polling without writing.
                self.idle_polls += 1;
                assert!(self.idle_polls < 1_000, "receive with no scripted input left");
                return LSR_THRE;
            }
            LSR_DR | LSR_THRE
        } else if addr == regs.rbr {
            self.idle_polls = 0;
            u32::from(self.input.pop_front().expect("read past scripted input"))
        } else {
            panic!("unexpected UART read at {:#010x}", addr)
        }
    }

    fn write_word(&mut self, addr: u32, value: u32) {
        assert_eq!(addr, regs().thr, "unexpected UART write");
        self.idle_polls = 0;
        self.output.push(value as u8);
    }
}

/// Port without newline translation, for driving the line editor directly.
#[derive(Default)]
pub struct RecordingPort {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
}

impl RecordingPort {
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl SerialPort for RecordingPort {
    fn receive_byte(&mut self) -> u8 {
        self.input.pop_front().expect("read past scripted input")
    }

    fn transmit_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }
}

/// Sparse memory that logs every access.
#[derive(Default)]
pub struct FakeMemory {
    pub words: BTreeMap<u32, u32>,
    /// Stores to these addresses are ignored.
    pub read_only: BTreeSet<u32>,
    pub reads: Vec<u32>,
    pub writes: Vec<(u32, u32)>,
}

impl FakeMemory {
    pub fn with_word(addr: u32, value: u32) -> Self {
        let mut mem = Self::default();
        mem.words.insert(addr, value);
        mem
    }

    pub fn word(&self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    pub fn touched(&self) -> bool {
        !self.reads.is_empty() || !self.writes.is_empty()
    }
}

impl WordBus for FakeMemory {
    fn read_word(&mut self, addr: u32) -> u32 {
        self.reads.push(addr);
        self.word(addr)
    }

    fn write_word(&mut self, addr: u32, value: u32) {
        self.writes.push((addr, value));
        if !self.read_only.contains(&addr) {
            self.words.insert(addr, value);
        }
    }
}

pub type TestConsole = Console<Uart<FakeUart>, FakeMemory>;

pub fn console(memory: FakeMemory) -> TestConsole {
    Console::new(Uart::new(FakeUart::default(), regs()), memory)
}

/// Type `line` plus CR, run one iteration, return (code, wire output).
pub fn run_line(console: &mut TestConsole, line: &[u8]) -> (i32, String) {
    {
        let uart = console.port_mut().bus_mut();
        uart.output.clear();
        uart.input.extend(line.iter().copied());
        uart.input.push_back(b'\r');
    }
    let code = result_code(&console.step());
    let output = console.port_mut().bus_mut().output_str();
    (code, output)
}
