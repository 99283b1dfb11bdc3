use crate::cpu::dispatch::ExecResult;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// 8-bit ALU operations on A: ADD/ADC/SUB/SBC/AND/XOR/OR/CP r,(HL)
    pub(crate) fn exec_alu_reg_group(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_reg8(bus, opcode);
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        Ok(())
    }

    /// 8-bit ALU immediate operations on A: ADD/ADC/SUB/SBC/AND/XOR/OR/CP d8
    pub(crate) fn exec_alu_imm(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch8(bus);
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        Ok(())
    }

    /// RLA: rotate A left through carry. Z is always cleared.
    pub(crate) fn exec_rla(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> ExecResult {
        self.regs.a = self.alu_rl(self.regs.a);
        self.regs.f.remove(crate::cpu::Flags::ZERO);
        Ok(())
    }

    #[inline]
    fn alu_dispatch(&mut self, op: u8, value: u8) {
        match op {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }
}
