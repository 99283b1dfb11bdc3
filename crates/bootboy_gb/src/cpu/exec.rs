mod alu;
mod control;
mod incdec;
mod ld;
mod stack;

use super::dispatch::ExecResult;
use super::{Bus, Cpu};

impl Cpu {
    pub(crate) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> ExecResult {
        Ok(())
    }
}
