use std::io::{self, BufRead, Write};

use bootboy_gb::cpu::{is_supported, Cpu};
use bootboy_gb::error::Opcode;
use bootboy_gb::{DebugAction, Debugger, Memory};

use crate::diag;

/// Interactive single-stepper.
///
/// Before each instruction prints PC, the opcode about to run and the
/// registers, then waits for a command: empty line or `s` steps, `c`
/// continues without pausing, `q` stops. End of input stops as well.
pub struct Stepper<R, W> {
    input: R,
    output: W,
    paused: bool,
}

impl Stepper<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Stepper<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            paused: true,
        }
    }

    fn prompt(&mut self, cpu: &Cpu, memory: &Memory) -> io::Result<DebugAction> {
        let pc = cpu.regs.pc;
        let opcode = match memory.read8(pc) {
            0xCB => Opcode::Extended(memory.read8(pc.wrapping_add(1))),
            op => Opcode::Primary(op),
        };
        let marker = if is_supported(opcode) {
            ""
        } else {
            " (unsupported)"
        };
        write!(
            self.output,
            "0x{pc:04X}: {opcode}{marker}\n{}",
            diag::registers(&cpu.regs)
        )?;

        loop {
            write!(self.output, "[s]tep [c]ontinue [q]uit> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(DebugAction::Stop);
            }
            match line.trim() {
                "" | "s" => return Ok(DebugAction::Continue),
                "c" => {
                    self.paused = false;
                    return Ok(DebugAction::Continue);
                }
                "q" => return Ok(DebugAction::Stop),
                other => writeln!(self.output, "unknown command '{other}'")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Debugger for Stepper<R, W> {
    fn before_step(&mut self, cpu: &Cpu, memory: &Memory) -> DebugAction {
        if !self.paused {
            return DebugAction::Continue;
        }
        self.prompt(cpu, memory).unwrap_or_else(|err| {
            log::warn!("Debugger I/O failed, stopping: {err}");
            DebugAction::Stop
        })
    }
}
