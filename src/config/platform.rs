//! SoC identification and UART register resolution.
//!
//! The boot ROM leaves a chip id at [`SOC_ID_ADDR`]. Every supported chip
//! exposes its console UART as a 16550-style block; the three registers the
//! console needs sit at fixed offsets from the block base.

use crate::hal::WordBus;

/// Address of the SoC id word.
pub const SOC_ID_ADDR: u32 = 0x0800_0000;

/// UART base used for ids not in [`PLATFORMS`].
pub const DEFAULT_UART_BASE: u32 = 0x1100_2000;

/// Receive buffer register offset.
pub const UART_RBR_OFFSET: u32 = 0x00;

/// Transmit holding register offset (shared with RBR).
pub const UART_THR_OFFSET: u32 = 0x00;

/// Line status register offset.
pub const UART_LSR_OFFSET: u32 = 0x14;

/// Addresses of the three UART registers the transport driver touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSet {
    /// Receive-data register.
    pub rbr: u32,
    /// Transmit-data register.
    pub thr: u32,
    /// Line-status register.
    pub lsr: u32,
}

impl RegisterSet {
    /// Derive the register set from a UART block base.
    pub const fn from_base(base: u32) -> Self {
        Self {
            rbr: base + UART_RBR_OFFSET,
            thr: base + UART_THR_OFFSET,
            lsr: base + UART_LSR_OFFSET,
        }
    }
}

/// Known chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub soc_id: u32,
    pub name: &'static str,
    pub uart_base: u32,
}

impl Platform {
    /// Fallback for unrecognised ids.
    pub const UNKNOWN: Platform = Platform {
        soc_id: 0,
        name: "unknown",
        uart_base: DEFAULT_UART_BASE,
    };

    /// Console UART registers of this chip.
    pub const fn registers(&self) -> RegisterSet {
        RegisterSet::from_base(self.uart_base)
    }
}

/// All supported chips.
pub static PLATFORMS: &[Platform] = &[
    Platform { soc_id: 0x0279, name: "MT6797", uart_base: 0x1100_2000 },
    Platform { soc_id: 0x0321, name: "MT6735", uart_base: 0x1100_2000 },
    Platform { soc_id: 0x0335, name: "MT6737M", uart_base: 0x1100_2000 },
    Platform { soc_id: 0x8163, name: "MT8163", uart_base: 0x1100_2000 },
];

/// Find the platform for `soc_id`, falling back to [`Platform::UNKNOWN`].
///
/// The fallback keeps the id that was read so it can be reported.
pub fn lookup(soc_id: u32) -> Platform {
    PLATFORMS
        .iter()
        .copied()
        .find(|p| p.soc_id == soc_id)
        .unwrap_or(Platform { soc_id, ..Platform::UNKNOWN })
}

/// Read the SoC id from `bus` and resolve the platform.
///
/// Called once, before the command loop starts.
pub fn detect<B: WordBus + ?Sized>(bus: &mut B) -> Platform {
    let soc_id = bus.read_word(SOC_ID_ADDR);
    let platform = lookup(soc_id);
    log::info!(
        "soc id {:#06x} ({}), uart base {:#010x}",
        soc_id,
        platform.name,
        platform.uart_base
    );
    platform
}
