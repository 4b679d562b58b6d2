use crate::cpu::{Bus, Cpu, Reg16Mode};

impl Cpu {
    /// `push r16` with BC, DE, HL, AF (11rr_0101). 4 cycles.
    pub(in crate::cpu) fn push(&mut self, bus: &mut dyn Bus, r16: u8) {
        let value = self.regs.reg16(r16, Reg16Mode::Stack);
        self.idle_cycle();
        self.push_u16(bus, value);
    }

    /// `pop r16` (11rr_0001). Popping AF drops the low nibble of F. 3 cycles.
    pub(in crate::cpu) fn pop(&mut self, bus: &mut dyn Bus, r16: u8) {
        let value = self.pop_u16(bus);
        self.regs.set_reg16(r16, value, Reg16Mode::Stack);
    }

    /// `rst vec` (11vv_v111), vector = field * 8. 4 cycles.
    pub(in crate::cpu) fn rst(&mut self, bus: &mut dyn Bus, vector: u8) {
        let ret = self.regs.pc;
        self.idle_cycle();
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(vector & 0x07) * 8;
    }

    /// `call a16` (0xCD). 6 cycles.
    pub(in crate::cpu) fn call_imm16(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        self.call(bus, addr);
    }

    /// `call cc, a16`. 6 cycles taken, 3 not taken.
    pub(in crate::cpu) fn call_cond_imm16(&mut self, bus: &mut dyn Bus, cc: u8) {
        let addr = self.fetch16(bus);
        if self.condition(cc) {
            self.call(bus, addr);
        }
    }

    fn call(&mut self, bus: &mut dyn Bus, addr: u16) {
        let ret = self.regs.pc;
        self.idle_cycle();
        self.push_u16(bus, ret);
        self.regs.pc = addr;
    }

    /// `ret` (0xC9). 4 cycles.
    pub(in crate::cpu) fn ret(&mut self, bus: &mut dyn Bus) {
        self.regs.pc = self.pop_u16(bus);
        self.idle_cycle();
    }

    /// `ret cc`. The condition check costs a cycle: 5 taken, 2 not taken.
    pub(in crate::cpu) fn ret_cond(&mut self, bus: &mut dyn Bus, cc: u8) {
        self.idle_cycle();
        if self.condition(cc) {
            self.ret(bus);
        }
    }

    /// `reti` (0xD9). IME is set immediately, without the EI delay.
    pub(in crate::cpu) fn reti(&mut self, bus: &mut dyn Bus) {
        self.ret(bus);
        self.ime = true;
        self.ime_enable_pending = false;
    }
}
