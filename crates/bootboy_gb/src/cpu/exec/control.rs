use crate::cpu::dispatch::ExecResult;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    #[inline]
    fn cc_condition(&self, cc: u8) -> bool {
        let flags = self.regs.f;
        match cc & 0x03 {
            0 => !flags.zero(),  // NZ
            1 => flags.zero(),   // Z
            2 => !flags.carry(), // NC
            _ => flags.carry(),  // C
        }
    }

    /// JR r8
    pub(crate) fn exec_jr(&mut self, bus: &mut dyn Bus, _opcode: u8) -> ExecResult {
        self.jr(bus, true);
        Ok(())
    }

    /// JR cc, r8
    pub(crate) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> ExecResult {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cond = self.cc_condition(opcode >> 3);
        self.jr(bus, cond);
        Ok(())
    }

    pub(crate) fn exec_jp_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> ExecResult {
        self.regs.pc = self.fetch16(bus);
        Ok(())
    }

    pub(crate) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> ExecResult {
        let addr = self.fetch16(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        log::debug!("CALL 0x{addr:04X} (return to 0x{ret:04X})");
        self.regs.pc = addr;
        Ok(())
    }

    pub(crate) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> ExecResult {
        let addr = self.pop_u16(bus);
        log::debug!("RET to 0x{addr:04X}");
        self.regs.pc = addr;
        Ok(())
    }
}
