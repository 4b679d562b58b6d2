//! CB-prefixed instructions. The prefix and the second opcode byte are
//! fetched by `step`, so every handler here starts at 2 cycles.

use super::{Bus, Cpu};

impl Cpu {
    /// RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL on r8. 2 cycles, 4 for `[hl]`.
    pub(super) fn rotate_shift_reg8(&mut self, bus: &mut dyn Bus, op: u8, reg: u8) {
        let value = self.read_reg8(bus, reg);
        let result = self.alu_rotate_shift(op, value);
        self.write_reg8(bus, reg, result);
    }

    /// BIT b, r8: Z = !bit, N = 0, H = 1, C unaffected. 2 cycles, 3 for
    /// `[hl]` (no write back).
    pub(super) fn bit_reg8(&mut self, bus: &mut dyn Bus, bit: u8, reg: u8) {
        let value = self.read_reg8(bus, reg);
        self.regs.zero = value & (1 << (bit & 0x07)) == 0;
        self.regs.subtract = false;
        self.regs.half_carry = true;
    }

    /// RES b, r8. No flags. 2 cycles, 4 for `[hl]`.
    pub(super) fn res_reg8(&mut self, bus: &mut dyn Bus, bit: u8, reg: u8) {
        let value = self.read_reg8(bus, reg);
        self.write_reg8(bus, reg, value & !(1 << (bit & 0x07)));
    }

    /// SET b, r8. No flags. 2 cycles, 4 for `[hl]`.
    pub(super) fn set_reg8(&mut self, bus: &mut dyn Bus, bit: u8, reg: u8) {
        let value = self.read_reg8(bus, reg);
        self.write_reg8(bus, reg, value | (1 << (bit & 0x07)));
    }
}
