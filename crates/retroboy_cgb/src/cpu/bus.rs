/// Byte-addressable bus as seen by the CPU.
///
/// Implementations only move bytes; the CPU charges one cycle for every call
/// it makes, so a bus never needs to know about timing.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
