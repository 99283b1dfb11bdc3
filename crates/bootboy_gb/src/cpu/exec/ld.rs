use crate::cpu::dispatch::ExecResult;
use crate::cpu::{Bus, Cpu};

/// Base address of the port-style `LDH` forms.
const IO_PAGE: u16 = 0xFF00;

impl Cpu {
    pub(crate) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16(bus);
        self.write_rp(opcode >> 4, value);
        Ok(())
    }

    pub(crate) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(
            matches!(
                opcode,
                0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
            ),
            "unexpected LD r,d8 opcode {opcode:#04x}"
        );
        let value = self.fetch8(bus);
        self.write_reg8(bus, opcode >> 3, value);
        Ok(())
    }

    /// LD r1, r2 over the 0x40–0x7F block.
    pub(crate) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let value = self.read_reg8(bus, opcode);
        self.write_reg8(bus, opcode >> 3, value);
        Ok(())
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
    pub(crate) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        Ok(())
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
    pub(crate) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        Ok(())
    }

    /// LDH (a8),A / LDH A,(a8)
    pub(crate) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));
        let addr = IO_PAGE | self.fetch8(bus) as u16;
        self.transfer_a(bus, addr, opcode == 0xE0);
        Ok(())
    }

    /// LD (C),A / LD A,(C)
    pub(crate) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));
        let addr = IO_PAGE | self.regs.c as u16;
        self.transfer_a(bus, addr, opcode == 0xE2);
        Ok(())
    }

    /// LD (a16),A / LD A,(a16)
    pub(crate) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));
        let addr = self.fetch16(bus);
        self.transfer_a(bus, addr, opcode == 0xEA);
        Ok(())
    }

    #[inline]
    fn transfer_a(&mut self, bus: &mut dyn Bus, addr: u16, store: bool) {
        if store {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
    }

    /// Resolve the pointer used by the 0x02/0x0A column. The HL forms
    /// post-increment (0x22/0x2A) or post-decrement (0x32/0x3A) HL.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match opcode >> 4 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }
}
