pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod debugger;
pub mod error;
pub mod machine;
pub mod memory;
pub mod video;

pub use cartridge::{Cartridge, LogoPreview};
pub use config::EmulatorConfig;
pub use debugger::{DebugAction, Debugger, NullDebugger};
pub use error::{EmuError, Result};
pub use machine::{GameBoy, RunExit};
pub use memory::Memory;
pub use video::{Frame, FrameSink};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Width and height of the scrollable background plane.
pub const BACKGROUND_SIZE: usize = 256;
