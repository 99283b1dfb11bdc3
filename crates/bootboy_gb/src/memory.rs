use crate::cpu::Bus;
use crate::error::{EmuError, LoadTarget, Result};

/// Total addressable memory for the Game Boy (64 KiB).
///
/// We keep a flat array. Only a handful of cells behave like registers
/// rather than storage; see [`io`].
pub const MEMORY_SIZE: usize = 0x10000;

/// Size of the DMG boot ROM mapped at `0x0000`.
pub const BOOT_ROM_SIZE: usize = 0x100;

/// First cartridge byte visible to the CPU once the boot ROM is mapped.
///
/// The boot ROM occupies `0x0000..0x0100`, so cartridge bytes below this
/// offset are never copied. The boot code compares the logo at `0x0104`
/// against its own copy, which therefore has to come from the cartridge.
pub const CARTRIDGE_START: usize = 0x100;

/// End (exclusive) of the cartridge ROM window. Without bank switching
/// anything past this point is unreachable.
pub const ROM_END: usize = 0x8000;

/// Start of tile pattern data (16 bytes per tile).
pub const TILE_DATA_START: u16 = 0x8000;
/// Start of the 32x32 background tile map.
pub const TILE_MAP_START: u16 = 0x9800;

/// Memory-mapped I/O registers.
pub mod io {
    /// Background scroll Y.
    pub const SCY: u16 = 0xFF42;
    /// Background scroll X.
    pub const SCX: u16 = 0xFF43;
    /// Current scan line.
    pub const LY: u16 = 0xFF44;

    /// Value every LY read returns: the first VBlank line.
    ///
    /// There is no PPU timing model, so we pretend a frame has just been
    /// completed. The boot ROM polls for exactly this value.
    pub const LY_FRAME_COMPLETE: u8 = 0x90;
}

/// Flat 64 KiB address space shared by the CPU and the renderer.
pub struct Memory {
    cells: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Map the boot ROM at `0x0000`.
    pub fn load_boot(&mut self, boot: &[u8]) -> Result<()> {
        if boot.len() > BOOT_ROM_SIZE {
            return Err(EmuError::oversized(
                LoadTarget::BootRom,
                boot.len(),
                BOOT_ROM_SIZE,
            ));
        }
        self.cells[..boot.len()].copy_from_slice(boot);
        log::info!("Loaded {} byte boot ROM", boot.len());
        Ok(())
    }

    /// Map a cartridge image, skipping its first 256 bytes.
    ///
    /// Returns the number of bytes copied. Images larger than the 32 KiB ROM
    /// window are truncated.
    pub fn load_cartridge(&mut self, rom: &[u8]) -> usize {
        if rom.len() <= CARTRIDGE_START {
            log::warn!(
                "Cartridge is only {} bytes; nothing to map past 0x{CARTRIDGE_START:04X}",
                rom.len()
            );
            return 0;
        }

        let end = rom.len().min(ROM_END);
        if rom.len() > ROM_END {
            log::warn!(
                "Cartridge is {} bytes; only the first 0x{ROM_END:04X} are mapped",
                rom.len()
            );
        }
        self.cells[CARTRIDGE_START..end].copy_from_slice(&rom[CARTRIDGE_START..end]);
        let copied = end - CARTRIDGE_START;
        log::info!("Mapped {copied} cartridge bytes at 0x{CARTRIDGE_START:04X}");
        copied
    }

    #[inline]
    pub fn read8(&self, addr: u16) -> u8 {
        match addr {
            io::LY => io::LY_FRAME_COMPLETE,
            _ => self.cells[addr as usize],
        }
    }

    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;
    }

    #[inline]
    pub fn scy(&self) -> u8 {
        self.read8(io::SCY)
    }

    #[inline]
    pub fn scx(&self) -> u8 {
        self.read8(io::SCX)
    }

    /// Copy `N` consecutive bytes starting at `addr`, wrapping at the top of
    /// the address space.
    pub fn read_array<const N: usize>(&self, addr: u16) -> [u8; N] {
        let mut out = [0u8; N];
        for (offset, byte) in out.iter_mut().enumerate() {
            *byte = self.read8(addr.wrapping_add(offset as u16));
        }
        out
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&self, addr: u16) -> u8 {
        Memory::read8(self, addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        Memory::write8(self, addr, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ly_always_reads_frame_complete() {
        let mut memory = Memory::new();
        assert_eq!(memory.read8(io::LY), io::LY_FRAME_COMPLETE);
        memory.write8(io::LY, 0x12);
        assert_eq!(memory.read8(io::LY), io::LY_FRAME_COMPLETE);
    }

    #[test]
    fn scroll_registers_are_plain_cells() {
        let mut memory = Memory::new();
        memory.write8(io::SCY, 0x64);
        memory.write8(io::SCX, 0x07);
        assert_eq!(memory.scy(), 0x64);
        assert_eq!(memory.scx(), 0x07);
    }

    #[test]
    fn boot_rom_is_mapped_at_zero() {
        let mut memory = Memory::new();
        memory.load_boot(&[0x31, 0xFE, 0xFF]).unwrap();
        assert_eq!(memory.read_array::<3>(0x0000), [0x31, 0xFE, 0xFF]);
    }

    #[test]
    fn oversized_boot_rom_is_rejected() {
        let mut memory = Memory::new();
        let err = memory.load_boot(&[0; BOOT_ROM_SIZE + 1]).unwrap_err();
        assert!(matches!(err, EmuError::Load { .. }));
    }

    #[test]
    fn cartridge_skips_first_page() {
        let mut rom = vec![0xAA; 0x200];
        rom[0x104] = 0xCE;
        let mut memory = Memory::new();
        memory.load_boot(&[0x11; BOOT_ROM_SIZE]).unwrap();

        let copied = memory.load_cartridge(&rom);

        assert_eq!(copied, 0x100);
        // Boot ROM is untouched.
        assert_eq!(memory.read8(0x00FF), 0x11);
        assert_eq!(memory.read8(0x0100), 0xAA);
        assert_eq!(memory.read8(0x0104), 0xCE);
        assert_eq!(memory.read8(0x0200), 0x00);
    }

    #[test]
    fn cartridge_is_truncated_at_rom_window() {
        let rom = vec![0x55; ROM_END + 0x1000];
        let mut memory = Memory::new();

        let copied = memory.load_cartridge(&rom);

        assert_eq!(copied, ROM_END - CARTRIDGE_START);
        assert_eq!(memory.read8(0x7FFF), 0x55);
        assert_eq!(memory.read8(TILE_DATA_START), 0x00);
    }
}
