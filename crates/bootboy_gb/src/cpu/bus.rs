/// Abstraction over the Game Boy address space as seen by the CPU.
///
/// [`crate::Memory`] is the production implementation; tests use a plain
/// array without memory-mapped registers.
pub trait Bus {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
