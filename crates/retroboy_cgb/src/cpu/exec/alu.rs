use crate::cpu::{Bus, Cpu, Reg16Mode};

impl Cpu {
    /// Apply the 3-bit ALU operation `op` (add, adc, sub, sbc, and, xor, or,
    /// cp) to A and `value`.
    fn alu_a(&mut self, op: u8, value: u8) {
        let a = self.regs.a;
        match op & 0x07 {
            0 => self.regs.a = self.alu_add(a, value, false),
            1 => self.regs.a = self.alu_add(a, value, true),
            2 => self.regs.a = self.alu_sub(a, value, false),
            3 => self.regs.a = self.alu_sub(a, value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => {
                let _ = self.alu_sub(a, value, false);
            }
        }
    }

    /// `alu a, r8` (10oo_orrr). 1 cycle, 2 for `[hl]`.
    pub(in crate::cpu) fn alu_a_reg8(&mut self, bus: &mut dyn Bus, op: u8, src: u8) {
        let value = self.read_reg8(bus, src);
        self.alu_a(op, value);
    }

    /// `alu a, imm8` (11oo_o110). 2 cycles.
    pub(in crate::cpu) fn alu_a_imm8(&mut self, bus: &mut dyn Bus, op: u8) {
        let value = self.fetch8(bus);
        self.alu_a(op, value);
    }

    /// `add hl, r16` (00rr_1001). 2 cycles.
    pub(in crate::cpu) fn add_hl_reg16(&mut self, _bus: &mut dyn Bus, r16: u8) {
        let value = self.regs.reg16(r16, Reg16Mode::Normal);
        self.alu_add16_hl(value);
        self.idle_cycle();
    }

    /// `add sp, e8` (0xE8). 4 cycles.
    pub(in crate::cpu) fn add_sp_imm8(&mut self, bus: &mut dyn Bus) {
        let imm8 = self.fetch8(bus);
        self.regs.sp = self.alu_add_sp_imm8(imm8);
        self.idle_cycle();
        self.idle_cycle();
    }

    /// RLCA, RRCA, RLA, RRA: the CB rotates applied to A, except Z is
    /// always cleared.
    pub(in crate::cpu) fn rotate_a(&mut self, op: u8) {
        self.regs.a = self.alu_rotate_shift(op, self.regs.a);
        self.regs.zero = false;
    }

    pub(in crate::cpu) fn daa(&mut self, _bus: &mut dyn Bus) {
        self.alu_daa();
    }

    pub(in crate::cpu) fn cpl(&mut self, _bus: &mut dyn Bus) {
        self.regs.a = !self.regs.a;
        self.regs.subtract = true;
        self.regs.half_carry = true;
    }

    pub(in crate::cpu) fn scf(&mut self, _bus: &mut dyn Bus) {
        self.regs.subtract = false;
        self.regs.half_carry = false;
        self.regs.carry = true;
    }

    pub(in crate::cpu) fn ccf(&mut self, _bus: &mut dyn Bus) {
        self.regs.subtract = false;
        self.regs.half_carry = false;
        self.regs.carry = !self.regs.carry;
    }
}
