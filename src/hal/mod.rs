//! Hardware Abstraction Layer for RustMemConsole.
//!
//! Thin wrappers around the memory bus and the serial transport.
//! Console logic stays in `console`, HAL is just I/O.

pub mod uart;

pub use uart::{PortWriter, SerialPort, Uart};

/// Word-addressable memory interface.
///
/// Every device register and every inspected word is reached through this
/// trait, so test doubles can stand in for real memory.
///
/// Implementations must guarantee:
/// - accesses are exactly 32 bits wide at the given byte address
/// - accesses complete synchronously before returning
pub trait WordBus {
    /// Load the 32-bit word at byte address `addr`.
    fn read_word(&mut self, addr: u32) -> u32;

    /// Store `value` to the 32-bit word at byte address `addr`.
    fn write_word(&mut self, addr: u32, value: u32);
}

impl<B: WordBus + ?Sized> WordBus for &mut B {
    fn read_word(&mut self, addr: u32) -> u32 {
        (**self).read_word(addr)
    }

    fn write_word(&mut self, addr: u32, value: u32) {
        (**self).write_word(addr, value)
    }
}

/// Physical memory accessed with volatile loads and stores.
///
/// ## Safety
///
/// Only meaningful on a target whose physical address space is flat and
/// identity-mapped. Any address can be targeted, including this program's own
/// code and data.
#[derive(Debug, Clone, Copy)]
pub struct RawBus {
    _private: (),
}

impl RawBus {
    /// Create a handle to physical memory.
    ///
    /// # Safety
    ///
    /// The caller asserts that byte addresses map 1:1 onto physical memory and
    /// that no other agent relies on the words this handle will touch.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl WordBus for RawBus {
    #[cfg(target_arch = "aarch64")]
    fn read_word(&mut self, addr: u32) -> u32 {
        let value: u32;
        // Plain `ldr` so that address 0 stays reachable.
        // SAFETY: see `RawBus::new`.
        unsafe {
            core::arch::asm!(
                "ldr {v:w}, [{a}]",
                v = out(reg) value,
                a = in(reg) addr as u64,
                options(nostack, preserves_flags),
            );
        }
        value
    }

    #[cfg(target_arch = "aarch64")]
    fn write_word(&mut self, addr: u32, value: u32) {
        // SAFETY: see `RawBus::new`.
        unsafe {
            core::arch::asm!(
                "str {v:w}, [{a}]",
                v = in(reg) value,
                a = in(reg) addr as u64,
                options(nostack, preserves_flags),
            );
        }
    }

    #[cfg(not(target_arch = "aarch64"))]
    fn read_word(&mut self, addr: u32) -> u32 {
        // SAFETY: see `RawBus::new`.
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    #[cfg(not(target_arch = "aarch64"))]
    fn write_word(&mut self, addr: u32, value: u32) {
        // SAFETY: see `RawBus::new`.
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}
