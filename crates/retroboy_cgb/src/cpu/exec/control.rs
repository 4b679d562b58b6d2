use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// `jr e8` (0x18). 3 cycles.
    pub(in crate::cpu) fn jr_imm8(&mut self, bus: &mut dyn Bus) {
        let offset = self.fetch8(bus) as i8;
        self.jump_relative(offset);
    }

    /// `jr cc, e8`. 3 cycles taken, 2 not taken.
    pub(in crate::cpu) fn jr_cond_imm8(&mut self, bus: &mut dyn Bus, cc: u8) {
        let offset = self.fetch8(bus) as i8;
        if self.condition(cc) {
            self.jump_relative(offset);
        }
    }

    fn jump_relative(&mut self, offset: i8) {
        self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
        self.idle_cycle();
    }

    /// `jp a16` (0xC3). 4 cycles.
    pub(in crate::cpu) fn jp_imm16(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        self.regs.pc = addr;
        self.idle_cycle();
    }

    /// `jp cc, a16`. 4 cycles taken, 3 not taken.
    pub(in crate::cpu) fn jp_cond_imm16(&mut self, bus: &mut dyn Bus, cc: u8) {
        let addr = self.fetch16(bus);
        if self.condition(cc) {
            self.regs.pc = addr;
            self.idle_cycle();
        }
    }

    /// `jp hl` (0xE9). 1 cycle.
    pub(in crate::cpu) fn jp_hl(&mut self, _bus: &mut dyn Bus) {
        self.regs.pc = self.regs.hl();
    }
}
