use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn nop(&mut self, _bus: &mut dyn Bus) {}

    /// `stop` (0x10). Two bytes on hardware; the padding byte is fetched
    /// and discarded.
    pub(in crate::cpu) fn stop(&mut self, bus: &mut dyn Bus) {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
    }

    pub(in crate::cpu) fn halt(&mut self, _bus: &mut dyn Bus) {
        self.halted = true;
        log::debug!("HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
    }

    pub(in crate::cpu) fn di(&mut self, _bus: &mut dyn Bus) {
        self.ime = false;
        self.ime_enable_pending = false;
    }

    /// IME becomes set after the *next* instruction completes.
    pub(in crate::cpu) fn ei(&mut self, _bus: &mut dyn Bus) {
        self.ime_enable_pending = true;
    }
}
