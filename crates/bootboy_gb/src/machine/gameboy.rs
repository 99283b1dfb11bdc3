use std::path::Path;

use crate::cartridge::Cartridge;
use crate::config::EmulatorConfig;
use crate::cpu::Cpu;
use crate::debugger::{DebugAction, Debugger, NullDebugger};
use crate::error::{EmuError, LoadTarget, Result};
use crate::memory::Memory;
use crate::video::{Frame, FrameSink, Graphics};

/// Why [`GameBoy::run`] returned without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunExit {
    /// The debugger asked to stop.
    Debugger,
    /// `max_steps` instructions were executed.
    StepLimit,
    /// PC reached the configured `stop_at` address.
    ReachedAddress(u16),
}

/// High-level Game Boy machine.
///
/// Owns the CPU, the memory image, the render scheduler, the frame sink and
/// the debugger hook. Every instruction is followed by a render check, so a
/// frame always reflects memory as the latest instruction left it.
pub struct GameBoy<S = Vec<Frame>, D = NullDebugger> {
    pub cpu: Cpu,
    pub memory: Memory,
    graphics: Graphics,
    sink: S,
    debugger: D,
    config: EmulatorConfig,
    steps: u64,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new(EmulatorConfig::default())
    }
}

impl GameBoy {
    /// Machine that collects frames in memory and runs without a debugger.
    pub fn new(config: EmulatorConfig) -> Self {
        Self::with_parts(config, Vec::new(), NullDebugger)
    }
}

impl<S: FrameSink, D: Debugger> GameBoy<S, D> {
    pub fn with_parts(config: EmulatorConfig, sink: S, debugger: D) -> Self {
        Self {
            cpu: Cpu::with_flag_policy(config.flag_policy),
            memory: Memory::new(),
            graphics: Graphics::new(),
            sink,
            debugger,
            config,
            steps: 0,
        }
    }

    /// Swap the debugger, keeping all machine state.
    pub fn with_debugger<E: Debugger>(self, debugger: E) -> GameBoy<S, E> {
        GameBoy {
            cpu: self.cpu,
            memory: self.memory,
            graphics: self.graphics,
            sink: self.sink,
            debugger,
            config: self.config,
            steps: self.steps,
        }
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn debugger(&self) -> &D {
        &self.debugger
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Frames handed to the sink so far.
    pub fn frames(&self) -> u64 {
        self.graphics.frames()
    }

    pub fn load_boot(&mut self, boot: &[u8]) -> Result<()> {
        self.memory.load_boot(boot)
    }

    pub fn load_boot_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let boot = std::fs::read(path.as_ref())
            .map_err(|e| EmuError::io(LoadTarget::BootRom, e))?;
        self.load_boot(&boot)
    }

    /// Map the cartridge behind the boot ROM. Returns the number of bytes
    /// copied.
    pub fn load_cartridge(&mut self, cartridge: &Cartridge) -> usize {
        let title = cartridge.title();
        if !title.is_empty() {
            log::info!("Cartridge title: {title}");
        }
        self.memory.load_cartridge(cartridge.bytes())
    }

    /// Put the CPU back at `0x0000` and force the next tick to render.
    /// Memory is left as is.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.graphics.invalidate();
        self.steps = 0;
    }

    /// Execute one instruction and re-render if scrolling changed.
    ///
    /// The debugger runs first; if it returns [`DebugAction::Stop`] nothing
    /// is executed.
    pub fn step(&mut self) -> Result<DebugAction> {
        if self.debugger.before_step(&self.cpu, &self.memory) == DebugAction::Stop {
            return Ok(DebugAction::Stop);
        }

        self.cpu.step(&mut self.memory)?;
        self.steps += 1;
        self.graphics.tick(&self.memory, &mut self.sink)?;
        Ok(DebugAction::Continue)
    }

    /// Run until an error, the debugger stops, or a configured limit is
    /// reached.
    pub fn run(&mut self) -> Result<RunExit> {
        log::info!("Starting execution at 0x{:04X}", self.cpu.regs.pc);

        let exit = loop {
            if self.config.max_steps.is_some_and(|max| self.steps >= max) {
                break RunExit::StepLimit;
            }
            let pc = self.cpu.regs.pc;
            if self.config.stop_at == Some(pc) {
                break RunExit::ReachedAddress(pc);
            }

            match self.step() {
                Ok(DebugAction::Continue) => {}
                Ok(DebugAction::Stop) => break RunExit::Debugger,
                Err(err) => {
                    log::error!("Stopped after {} steps: {err}", self.steps);
                    return Err(err);
                }
            }
        };

        log::info!(
            "Run ended ({exit:?}) after {} steps and {} frames, PC=0x{:04X}",
            self.steps,
            self.frames(),
            self.cpu.regs.pc
        );
        Ok(exit)
    }
}
