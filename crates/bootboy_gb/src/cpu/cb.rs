use super::dispatch::ExecResult;
use super::{Bus, Cpu, Flags};

impl Cpu {
    /// RL r: rotate left through carry.
    pub(crate) fn exec_cb_rl(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!((0x10..=0x17).contains(&opcode));
        let value = self.read_reg8(bus, opcode);
        let result = self.alu_rl(value);
        self.regs.f.set(Flags::ZERO, result == 0);
        self.write_reg8(bus, opcode, result);
        Ok(())
    }

    /// BIT b, r: Z is set when the tested bit is clear. H is forced on,
    /// N off, C preserved.
    pub(crate) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!((0x40..=0x7F).contains(&opcode));
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode);
        let bit_set = (value & (1 << bit)) != 0;

        self.regs.f.set(Flags::ZERO, !bit_set);
        self.regs.f.remove(Flags::SUBTRACTION);
        self.regs.f.insert(Flags::HALF_CARRY);
        Ok(())
    }
}
