mod gameboy;

pub use gameboy::{GameBoy, RunExit};
