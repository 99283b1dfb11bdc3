//! Hook invoked by the driver before every instruction.

use crate::cpu::Cpu;
use crate::memory::Memory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugAction {
    Continue,
    Stop,
}

pub trait Debugger {
    /// Called with the machine state right before the instruction at
    /// `cpu.regs.pc` executes.
    fn before_step(&mut self, cpu: &Cpu, memory: &Memory) -> DebugAction;
}

/// Debugger that never interferes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDebugger;

impl Debugger for NullDebugger {
    #[inline]
    fn before_step(&mut self, _cpu: &Cpu, _memory: &Memory) -> DebugAction {
        DebugAction::Continue
    }
}
