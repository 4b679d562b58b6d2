use crate::cpu::{Bus, Cpu, Reg16Mode};

impl Cpu {
    /// `ld r8, r8'` (01dd_dsss). 1 cycle, 2 when either side is `[hl]`.
    pub(in crate::cpu) fn ld_reg8_reg8(&mut self, bus: &mut dyn Bus, dst: u8, src: u8) {
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
    }

    /// `ld r8, imm8` (00rr_r110). 2 cycles, 3 for `[hl]`.
    pub(in crate::cpu) fn ld_reg8_imm8(&mut self, bus: &mut dyn Bus, reg: u8) {
        let value = self.fetch8(bus);
        self.write_reg8(bus, reg, value);
    }

    /// `ld r16, imm16` (00rr_0001). 3 cycles.
    pub(in crate::cpu) fn ld_reg16_imm16(&mut self, bus: &mut dyn Bus, r16: u8) {
        let value = self.fetch16(bus);
        self.regs.set_reg16(r16, value, Reg16Mode::Normal);
    }

    /// `ld [r16], a` with `[bc]`, `[de]`, `[hl+]`, `[hl-]` (00rr_0010). 2 cycles.
    pub(in crate::cpu) fn ld_mem_at_reg16_a(&mut self, bus: &mut dyn Bus, r16: u8) {
        let addr = self.regs.reg16(r16, Reg16Mode::Memory);
        self.write_cycle(bus, addr, self.regs.a);
    }

    /// `ld a, [r16]` (00rr_1010). 2 cycles.
    pub(in crate::cpu) fn ld_a_mem_at_reg16(&mut self, bus: &mut dyn Bus, r16: u8) {
        let addr = self.regs.reg16(r16, Reg16Mode::Memory);
        self.regs.a = self.read_cycle(bus, addr);
    }

    /// `ld [a16], sp` (0x08). Low byte first. 5 cycles.
    pub(in crate::cpu) fn ld_mem_at_imm16_sp(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        self.write_cycle(bus, addr, lo);
        self.write_cycle(bus, addr.wrapping_add(1), hi);
    }

    pub(in crate::cpu) fn ld_mem_at_imm16_a(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        self.write_cycle(bus, addr, self.regs.a);
    }

    pub(in crate::cpu) fn ld_a_mem_at_imm16(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        self.regs.a = self.read_cycle(bus, addr);
    }

    /// `ldh [a8], a` (0xE0). 3 cycles.
    pub(in crate::cpu) fn ldh_mem_at_imm8_a(&mut self, bus: &mut dyn Bus) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.write_cycle(bus, addr, self.regs.a);
    }

    /// `ldh a, [a8]` (0xF0). 3 cycles.
    pub(in crate::cpu) fn ldh_a_mem_at_imm8(&mut self, bus: &mut dyn Bus) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.regs.a = self.read_cycle(bus, addr);
    }

    /// `ld [c], a` (0xE2). 2 cycles.
    pub(in crate::cpu) fn ldh_mem_at_c_a(&mut self, bus: &mut dyn Bus) {
        let addr = 0xFF00 | u16::from(self.regs.c);
        self.write_cycle(bus, addr, self.regs.a);
    }

    /// `ld a, [c]` (0xF2). 2 cycles.
    pub(in crate::cpu) fn ldh_a_mem_at_c(&mut self, bus: &mut dyn Bus) {
        let addr = 0xFF00 | u16::from(self.regs.c);
        self.regs.a = self.read_cycle(bus, addr);
    }

    /// `ld hl, sp+e8` (0xF8). Flags as `add sp, e8`. 3 cycles.
    pub(in crate::cpu) fn ld_hl_sp_imm8(&mut self, bus: &mut dyn Bus) {
        let imm8 = self.fetch8(bus);
        let value = self.alu_add_sp_imm8(imm8);
        self.regs.set_hl(value);
        self.idle_cycle();
    }

    /// `ld sp, hl` (0xF9). 2 cycles.
    pub(in crate::cpu) fn ld_sp_hl(&mut self, _bus: &mut dyn Bus) {
        self.regs.sp = self.regs.hl();
        self.idle_cycle();
    }
}
