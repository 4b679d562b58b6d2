use super::Cpu;

impl Cpu {
    /// 8-bit add with optional carry-in. Sets all four flags and returns the
    /// truncated sum.
    pub(super) fn alu_add(&mut self, a: u8, b: u8, use_carry: bool) -> u8 {
        let carry_in = u16::from(use_carry && self.regs.carry);
        let full = u16::from(a) + u16::from(b) + carry_in;
        let half = u16::from(a & 0x0F) + u16::from(b & 0x0F) + carry_in;
        let result = full as u8;

        self.regs.zero = result == 0;
        self.regs.subtract = false;
        self.regs.half_carry = half > 0x0F;
        self.regs.carry = full > 0xFF;
        result
    }

    /// 8-bit subtract with optional borrow-in. Also used by CP, which simply
    /// discards the result.
    pub(super) fn alu_sub(&mut self, a: u8, b: u8, use_carry: bool) -> u8 {
        let carry_in = u16::from(use_carry && self.regs.carry);
        let result = u16::from(a).wrapping_sub(u16::from(b) + carry_in) as u8;

        self.regs.zero = result == 0;
        self.regs.subtract = true;
        self.regs.half_carry = u16::from(a & 0x0F) < u16::from(b & 0x0F) + carry_in;
        self.regs.carry = u16::from(a) < u16::from(b) + carry_in;
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.regs.zero = self.regs.a == 0;
        self.regs.subtract = false;
        self.regs.half_carry = true;
        self.regs.carry = false;
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.regs.zero = self.regs.a == 0;
        self.regs.subtract = false;
        self.regs.half_carry = false;
        self.regs.carry = false;
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.regs.zero = self.regs.a == 0;
        self.regs.subtract = false;
        self.regs.half_carry = false;
        self.regs.carry = false;
    }

    /// INC/DEC share add/sub with an operand of 1; C is preserved.
    #[inline]
    pub(super) fn alu_inc_dec(&mut self, value: u8, increment: bool) -> u8 {
        let carry = self.regs.carry;
        let result = if increment {
            self.alu_add(value, 1, false)
        } else {
            self.alu_sub(value, 1, false)
        };
        self.regs.carry = carry;
        result
    }

    /// `ADD HL,rr`. Z is unaffected; H is the carry out of bit 11.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let full = u32::from(hl) + u32::from(value);

        self.regs.subtract = false;
        self.regs.half_carry = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        self.regs.carry = full > 0xFFFF;
        self.regs.set_hl(full as u16);
    }

    /// SP plus a signed 8-bit displacement (`ADD SP,e8` and `LD HL,SP+e8`).
    ///
    /// H and C come from adding the unsigned immediate to the low byte of SP;
    /// only the returned address uses the sign-extended displacement.
    pub(super) fn alu_add_sp_imm8(&mut self, imm8: u8) -> u16 {
        let sp = self.regs.sp;
        let _ = self.alu_add(sp as u8, imm8, false);
        self.regs.zero = false;
        self.regs.subtract = false;
        sp.wrapping_add(imm8 as i8 as u16)
    }

    /// Decimal adjust A after a BCD add or subtract. N is left unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.regs.carry { 0x60 } else { 0x00 };
        if self.regs.half_carry {
            adjust |= 0x06;
        }

        if !self.regs.subtract {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.carry = adjust >= 0x60;
        self.regs.half_carry = false;
        self.regs.zero = a == 0;
        self.regs.a = a;
    }

    /// Shared core of the rotate/shift family. `op` is the 3-bit operation
    /// field of the CB block: RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL.
    ///
    /// Sets Z from the result, clears N and H, and sets C from the bit that
    /// was shifted out (SWAP clears C).
    pub(super) fn alu_rotate_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.carry);
        let (result, carry) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | carry_in, value & 0x80 != 0),
            3 => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.regs.zero = result == 0;
        self.regs.subtract = false;
        self.regs.half_carry = false;
        self.regs.carry = carry;
        result
    }
}
