use std::fmt;

use thiserror::Error;

use crate::cpu::{Bus, Registers};

pub type Result<T> = std::result::Result<T, EmuError>;

#[derive(Debug, Error)]
pub enum EmuError {
    /// The decoder hit a byte (or `CB xx` pair) without a handler. The CPU
    /// cannot continue because the following bytes can no longer be trusted
    /// to be instruction boundaries.
    #[error(transparent)]
    UnsupportedOpcode(Box<UnsupportedOpcode>),

    #[error("failed to load {target}")]
    Load {
        target: LoadTarget,
        #[source]
        source: LoadFailure,
    },

    #[error("frame sink failed")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EmuError {
    pub(crate) fn oversized(target: LoadTarget, len: usize, max: usize) -> Self {
        EmuError::Load {
            target,
            source: LoadFailure::Oversized { len, max },
        }
    }

    pub fn io(target: LoadTarget, source: std::io::Error) -> Self {
        EmuError::Load {
            target,
            source: LoadFailure::Io(source),
        }
    }

    /// Diagnostics for a decode failure, if that is what this error is.
    pub fn unsupported_opcode(&self) -> Option<&UnsupportedOpcode> {
        match self {
            EmuError::UnsupportedOpcode(inner) => Some(inner),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("image is {len} bytes but at most {max} fit")]
    Oversized { len: usize, max: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTarget {
    BootRom,
    Cartridge,
}

impl fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadTarget::BootRom => f.write_str("boot ROM"),
            LoadTarget::Cartridge => f.write_str("cartridge"),
        }
    }
}

/// Identifies an opcode in either the primary or the `0xCB` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Primary(u8),
    Extended(u8),
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Primary(op) => write!(f, "0x{op:02X}"),
            Opcode::Extended(op) => write!(f, "0xCB 0x{op:02X}"),
        }
    }
}

/// Full context of a decode failure.
#[derive(Clone, Debug)]
pub struct UnsupportedOpcode {
    pub opcode: Opcode,
    /// Address the (first) opcode byte was fetched from.
    pub address: u16,
    /// Register file at the time of the failure. `pc` equals `address`.
    pub registers: Registers,
    pub window: MemoryWindow,
}

impl fmt::Display for UnsupportedOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported opcode {} at 0x{:04X}",
            self.opcode, self.address
        )
    }
}

impl std::error::Error for UnsupportedOpcode {}

/// A bounded copy of memory around an address of interest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryWindow {
    pub start: u16,
    pub bytes: Vec<u8>,
}

impl MemoryWindow {
    /// Bytes captured on each side of the center address.
    pub const RADIUS: u16 = 0x10;

    /// Capture `center - RADIUS ..= center + RADIUS`, clamped to the address
    /// space.
    pub fn around(bus: &dyn Bus, center: u16) -> Self {
        let start = center.saturating_sub(Self::RADIUS);
        let end = center.saturating_add(Self::RADIUS);
        let bytes = (start..=end).map(|addr| bus.read8(addr)).collect();
        Self { start, bytes }
    }

    pub fn get(&self, addr: u16) -> Option<u8> {
        let offset = addr.checked_sub(self.start)? as usize;
        self.bytes.get(offset).copied()
    }
}

impl fmt::Display for MemoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bootboy_common::hexdump(&self.bytes, self.start as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Memory;

    #[test]
    fn window_is_centered() {
        let mut memory = Memory::new();
        memory.write8(0x1234, 0xAB);
        let window = MemoryWindow::around(&memory, 0x1234);
        assert_eq!(window.start, 0x1224);
        assert_eq!(window.bytes.len(), 0x21);
        assert_eq!(window.get(0x1234), Some(0xAB));
        assert_eq!(window.get(0x1223), None);
    }

    #[test]
    fn window_is_clamped_at_both_ends() {
        let memory = Memory::new();
        let low = MemoryWindow::around(&memory, 0x0004);
        assert_eq!(low.start, 0x0000);
        assert_eq!(low.bytes.len(), 0x15);

        let high = MemoryWindow::around(&memory, 0xFFF8);
        assert_eq!(high.start, 0xFFE8);
        assert_eq!(high.bytes.len(), 0x18);
    }

    #[test]
    fn opcode_display() {
        assert_eq!(Opcode::Primary(0xD3).to_string(), "0xD3");
        assert_eq!(Opcode::Extended(0x37).to_string(), "0xCB 0x37");
    }
}
