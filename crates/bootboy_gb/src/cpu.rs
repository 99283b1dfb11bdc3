mod alu;
mod bus;
mod cb;
mod dispatch;
mod exec;
mod flags;
mod helpers;
mod regs;


pub use bus::Bus;
pub use dispatch::is_supported;
pub use flags::{FlagPolicy, Flags};
pub use regs::Registers;

use crate::error::{EmuError, MemoryWindow, Opcode, Result, UnsupportedOpcode};

use self::dispatch::{EXTENDED, PRIMARY};

/// Game Boy CPU core.
///
/// Holds the register file and the flag policy. Memory lives outside the CPU
/// and is passed into [`Cpu::step`], so the same core can run against the
/// real [`crate::Memory`] or a test bus.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    flag_policy: FlagPolicy,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-on CPU: every register zero, execution starts at `0x0000`
    /// where the boot ROM is mapped.
    pub fn new() -> Self {
        Self::with_flag_policy(FlagPolicy::default())
    }

    pub fn with_flag_policy(flag_policy: FlagPolicy) -> Self {
        Self {
            regs: Registers::default(),
            flag_policy,
        }
    }

    #[inline]
    pub fn flag_policy(&self) -> FlagPolicy {
        self.flag_policy
    }

    pub fn reset(&mut self) {
        self.regs = Registers::default();
    }

    /// Fetch, decode and execute a single instruction.
    ///
    /// On success PC points past the instruction and its operands (or at the
    /// jump target). On an unknown opcode the CPU state is rewound so that
    /// PC points at the offending opcode byte, and the error carries the
    /// register file and a window of memory around it.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<()> {
        let address = self.regs.pc;
        let opcode = self.fetch8(bus);
        log::trace!("0x{address:04X}: opcode 0x{opcode:02X}");

        let outcome = match PRIMARY[opcode as usize] {
            Some(handler) => handler(self, &mut *bus, opcode),
            None => Err(Opcode::Primary(opcode)),
        };

        outcome.map_err(|opcode| self.decode_failure(&*bus, opcode, address))
    }

    /// Handler for the `0xCB` prefix: fetch the second byte and dispatch
    /// through the extended table.
    fn exec_prefix_cb(&mut self, bus: &mut dyn Bus, _opcode: u8) -> dispatch::ExecResult {
        let opcode = self.fetch8(bus);
        match EXTENDED[opcode as usize] {
            Some(handler) => handler(self, bus, opcode),
            None => Err(Opcode::Extended(opcode)),
        }
    }

    fn decode_failure(&mut self, bus: &dyn Bus, opcode: Opcode, address: u16) -> EmuError {
        self.regs.pc = address;
        EmuError::UnsupportedOpcode(Box::new(UnsupportedOpcode {
            opcode,
            address,
            registers: self.regs,
            window: MemoryWindow::around(bus, address),
        }))
    }
}
