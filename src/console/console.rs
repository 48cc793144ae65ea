//! Main console struct integrating all components

use core::fmt::Write;

use super::{execute, parse_line, report, CommandContext, ConsoleError, LineEditor};
use crate::config::{ConsoleConfig, GREETING, PROMPT};
use crate::hal::{PortWriter, SerialPort, WordBus};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Read-eval loop over a serial port and a memory bus.
pub struct Console<P: SerialPort, M: WordBus> {
    port: P,
    memory: M,
    editor: LineEditor,
    config: ConsoleConfig,
}

impl<P: SerialPort, M: WordBus> Console<P, M> {
    /// Create new console with the default configuration
    pub fn new(port: P, memory: M) -> Self {
        Self::with_config(port, memory, ConsoleConfig::default())
    }

    pub fn with_config(port: P, memory: M, config: ConsoleConfig) -> Self {
        Self {
            port,
            memory,
            editor: LineEditor::new(),
            config,
        }
    }

    /// Print welcome banner
    pub fn print_banner(&mut self) {
        let mut out = PortWriter(&mut self.port);
        let _ = writeln!(out, "{}", GREETING);
        let _ = writeln!(out, "{}", VERSION);
        let _ = writeln!(out, "Type 'help' for commands.");
    }

    /// Print the prompt
    pub fn print_prompt(&mut self) {
        self.port.print(PROMPT);
    }

    /// Run one prompt/read/dispatch iteration.
    ///
    /// Failures have already been printed when this returns.
    pub fn step(&mut self) -> Result<(), ConsoleError<'_>> {
        self.port.print(PROMPT);
        let line = self.editor.read_line(&mut self.port);
        self.port.transmit_byte(b'\n');

        let args = parse_line(line);
        let mut out = PortWriter(&mut self.port);
        let mut ctx = CommandContext {
            out: &mut out,
            memory: &mut self.memory,
        };

        let result = execute(&args, &mut ctx);
        if let Err(e) = &result {
            report(e, ctx.out);
        }
        result
    }

    /// Serve commands forever. Errors never end the loop.
    pub fn run(&mut self) -> ! {
        if self.config.banner {
            self.print_banner();
        }
        loop {
            let _ = self.step();
        }
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Release the port and the memory bus.
    pub fn into_parts(self) -> (P, M) {
        (self.port, self.memory)
    }
}
