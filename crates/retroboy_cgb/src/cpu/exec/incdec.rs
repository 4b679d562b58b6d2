use crate::cpu::{Bus, Cpu, Reg16Mode};

impl Cpu {
    /// `inc r8` (00rr_r100). C unaffected. 1 cycle, 3 for `[hl]`.
    pub(in crate::cpu) fn inc_reg8(&mut self, bus: &mut dyn Bus, reg: u8) {
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc_dec(value, true);
        self.write_reg8(bus, reg, result);
    }

    /// `dec r8` (00rr_r101). C unaffected. 1 cycle, 3 for `[hl]`.
    pub(in crate::cpu) fn dec_reg8(&mut self, bus: &mut dyn Bus, reg: u8) {
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc_dec(value, false);
        self.write_reg8(bus, reg, result);
    }

    /// `inc r16` (00rr_0011). No flags. 2 cycles.
    pub(in crate::cpu) fn inc_reg16(&mut self, _bus: &mut dyn Bus, r16: u8) {
        let value = self.regs.reg16(r16, Reg16Mode::Normal).wrapping_add(1);
        self.regs.set_reg16(r16, value, Reg16Mode::Normal);
        self.idle_cycle();
    }

    /// `dec r16` (00rr_1011). No flags. 2 cycles.
    pub(in crate::cpu) fn dec_reg16(&mut self, _bus: &mut dyn Bus, r16: u8) {
        let value = self.regs.reg16(r16, Reg16Mode::Normal).wrapping_sub(1);
        self.regs.set_reg16(r16, value, Reg16Mode::Normal);
        self.idle_cycle();
    }
}
