//! RustMemConsole - Main entry point
//!
//! Bare metal (`target_os = "none"`): entered from the board start-up code
//! with a flat physical address space, console on the SoC's UART.
//!
//! Hosted: a small simulator. The UART registers are mapped onto
//! stdin/stdout and every other address is zero-initialised RAM, so scripts
//! can be piped through the real console code.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod bare_metal {
    use core::panic::PanicInfo;

    use rust_mem_console::{config, uart_logger, Console, ConsoleConfig, RawBus, Uart, UartLogger};

    static LOGGER: UartLogger = UartLogger::new();

    #[no_mangle]
    pub extern "C" fn main() -> ! {
        // SAFETY: the target runs with the MMU off; addresses are physical.
        let mut bus = unsafe { RawBus::new() };
        let platform = config::detect(&mut bus);
        let regs = platform.registers();
        let cfg = ConsoleConfig::default();

        // SAFETY: same bus contract as above.
        let logging = unsafe { uart_logger::init(&LOGGER, regs, cfg.log_level) };
        if logging.is_ok() {
            log::info!("{} console, uart base {:#010x}", platform.name, platform.uart_base);
        }

        let mut console = Console::with_config(Uart::new(bus, regs), bus, cfg);
        console.run()
    }

    #[panic_handler]
    fn panic(_info: &PanicInfo<'_>) -> ! {
        loop {
            core::hint::spin_loop();
        }
    }
}

#[cfg(not(target_os = "none"))]
mod host {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::io::{self, Read, Write};
    use std::rc::Rc;

    use rust_mem_console::config::{self, RegisterSet, DEFAULT_UART_BASE, SOC_ID_ADDR};
    use rust_mem_console::hal::uart::{LSR_DR, LSR_THRE};
    use rust_mem_console::{Console, Uart, WordBus};

    /// Id the simulated chip reports (MT6797).
    const SIM_SOC_ID: u32 = 0x0279;

    struct SimState {
        regs: RegisterSet,
        ram: BTreeMap<u32, u32>,
    }

    /// Shared view of the simulated address space.
    #[derive(Clone)]
    struct SimBus(Rc<RefCell<SimState>>);

    impl SimBus {
        fn new() -> Self {
            Self(Rc::new(RefCell::new(SimState {
                regs: RegisterSet::from_base(DEFAULT_UART_BASE),
                ram: BTreeMap::new(),
            })))
        }

        fn receive() -> u32 {
            let mut byte = [0u8; 1];
            match io::stdin().read(&mut byte) {
                Ok(1) => {}
                _ => {
                    let _ = io::stdout().flush();
                    std::process::exit(0);
                }
            }
            // Hosted terminals end lines with LF; the console wants CR.
            match byte[0] {
                b'\n' => u32::from(b'\r'),
                b => u32::from(b),
            }
        }
    }

    impl WordBus for SimBus {
        fn read_word(&mut self, addr: u32) -> u32 {
            let state = self.0.borrow();
            if addr == SOC_ID_ADDR {
                SIM_SOC_ID
            } else if addr == state.regs.lsr {
                LSR_DR | LSR_THRE
            } else if addr == state.regs.rbr {
                Self::receive()
            } else {
                state.ram.get(&addr).copied().unwrap_or(0)
            }
        }

        fn write_word(&mut self, addr: u32, value: u32) {
            let mut state = self.0.borrow_mut();
            if addr == state.regs.thr {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(&[value as u8]);
                let _ = stdout.flush();
            } else {
                state.ram.insert(addr, value);
            }
        }
    }

    pub fn run() -> ! {
        env_logger::init();

        let mut bus = SimBus::new();
        let platform = config::detect(&mut bus);
        log::info!("simulating {}", platform.name);

        let uart = Uart::new(bus.clone(), platform.registers());
        Console::new(uart, bus).run()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    host::run()
}
