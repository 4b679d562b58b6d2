//! Opcode decode tables.
//!
//! SM83 opcodes are a handful of regular bit-field layouts plus exceptions.
//! Each block (selected by the top two opcode bits, or the CB prefix) lists
//! its handlers under up to five lookup strategies, and the first strategy
//! that has a handler for the derived key wins:
//!
//! 1. exact opcode;
//! 2. low nibble, handler gets the r16 field (bits 5–4);
//! 3. r8 field (bits 5–3), handler gets the low r8' field (bits 2–0);
//! 4. r8' field, handler gets the r8 field;
//! 5. a block-wide handler taking both r8 and r8'.
//!
//! The strategies overlap by construction, so the order is part of the
//! contract. Tables are built once and shared by every CPU.

use lazy_static::lazy_static;

use super::{Bus, Cpu};

pub(super) const CB_PREFIX: u8 = 0xCB;

pub(super) type Op = fn(&mut Cpu, &mut dyn Bus);
pub(super) type FieldOp = fn(&mut Cpu, &mut dyn Bus, u8);
pub(super) type DualFieldOp = fn(&mut Cpu, &mut dyn Bus, u8, u8);

/// A resolved handler together with the operand fields it is called with.
#[derive(Clone, Copy)]
pub(super) enum Handler {
    Opcode(Op),
    Nibble(FieldOp, u8),
    R8(FieldOp, u8),
    R8Prime(FieldOp, u8),
    R8R8Prime(DualFieldOp, u8, u8),
}

impl Handler {
    #[inline]
    pub(super) fn invoke(self, cpu: &mut Cpu, bus: &mut dyn Bus) {
        match self {
            Handler::Opcode(op) => op(cpu, bus),
            Handler::Nibble(op, r16) => op(cpu, bus, r16),
            Handler::R8(op, r8_prime) => op(cpu, bus, r8_prime),
            Handler::R8Prime(op, r8) => op(cpu, bus, r8),
            Handler::R8R8Prime(op, r8, r8_prime) => op(cpu, bus, r8, r8_prime),
        }
    }
}

pub(super) struct OpcodeBlock {
    opcode_ops: [Option<Op>; 256],
    nibble_ops: [Option<FieldOp>; 16],
    r8_ops: [Option<FieldOp>; 8],
    r8_prime_ops: [Option<FieldOp>; 8],
    r8_r8_prime_op: Option<DualFieldOp>,
}

impl OpcodeBlock {
    const fn new() -> Self {
        Self {
            opcode_ops: [None; 256],
            nibble_ops: [None; 16],
            r8_ops: [None; 8],
            r8_prime_ops: [None; 8],
            r8_r8_prime_op: None,
        }
    }

    fn opcode(mut self, opcode: u8, op: Op) -> Self {
        debug_assert!(
            self.opcode_ops[opcode as usize].is_none(),
            "duplicate handler for opcode {opcode:#04x}"
        );
        self.opcode_ops[opcode as usize] = Some(op);
        self
    }

    fn nibble(mut self, nibble: u8, op: FieldOp) -> Self {
        self.nibble_ops[(nibble & 0x0F) as usize] = Some(op);
        self
    }

    fn r8(mut self, r8: u8, op: FieldOp) -> Self {
        self.r8_ops[(r8 & 0x07) as usize] = Some(op);
        self
    }

    fn r8_prime(mut self, r8_prime: u8, op: FieldOp) -> Self {
        self.r8_prime_ops[(r8_prime & 0x07) as usize] = Some(op);
        self
    }

    fn r8_r8_prime(mut self, op: DualFieldOp) -> Self {
        self.r8_r8_prime_op = Some(op);
        self
    }

    /// Find the handler for `opcode` using the strategy priority order.
    pub(super) fn resolve(&self, opcode: u8) -> Option<Handler> {
        if let Some(op) = self.opcode_ops[opcode as usize] {
            return Some(Handler::Opcode(op));
        }

        let r16 = (opcode >> 4) & 0x03;
        if let Some(op) = self.nibble_ops[(opcode & 0x0F) as usize] {
            return Some(Handler::Nibble(op, r16));
        }

        let r8 = (opcode >> 3) & 0x07;
        let r8_prime = opcode & 0x07;
        if let Some(op) = self.r8_ops[r8 as usize] {
            return Some(Handler::R8(op, r8_prime));
        }
        if let Some(op) = self.r8_prime_ops[r8_prime as usize] {
            return Some(Handler::R8Prime(op, r8));
        }

        self.r8_r8_prime_op
            .map(|op| Handler::R8R8Prime(op, r8, r8_prime))
    }
}

pub(super) struct DecodeTables {
    blocks: [OpcodeBlock; 4],
    cb_blocks: [OpcodeBlock; 4],
}

impl DecodeTables {
    #[inline]
    pub(super) fn block(&self, opcode: u8) -> &OpcodeBlock {
        &self.blocks[(opcode >> 6) as usize]
    }

    #[inline]
    pub(super) fn cb_block(&self, cb_opcode: u8) -> &OpcodeBlock {
        &self.cb_blocks[(cb_opcode >> 6) as usize]
    }

    fn new() -> Self {
        Self {
            blocks: [block_0(), block_1(), block_2(), block_3()],
            cb_blocks: [cb_block_0(), cb_block_1(), cb_block_2(), cb_block_3()],
        }
    }
}

lazy_static! {
    pub(super) static ref TABLES: DecodeTables = DecodeTables::new();
}

/// 00xx_xxxx: loads, 16-bit arithmetic, inc/dec, accumulator rotates,
/// relative jumps and miscellaneous control.
fn block_0() -> OpcodeBlock {
    OpcodeBlock::new()
        .opcode(0x00, Cpu::nop)
        .opcode(0x08, Cpu::ld_mem_at_imm16_sp)
        .opcode(0x10, Cpu::stop)
        .opcode(0x18, Cpu::jr_imm8)
        .opcode(0x20, |cpu, bus| cpu.jr_cond_imm8(bus, 0))
        .opcode(0x28, |cpu, bus| cpu.jr_cond_imm8(bus, 1))
        .opcode(0x30, |cpu, bus| cpu.jr_cond_imm8(bus, 2))
        .opcode(0x38, |cpu, bus| cpu.jr_cond_imm8(bus, 3))
        .opcode(0x07, |cpu, _| cpu.rotate_a(0))
        .opcode(0x0F, |cpu, _| cpu.rotate_a(1))
        .opcode(0x17, |cpu, _| cpu.rotate_a(2))
        .opcode(0x1F, |cpu, _| cpu.rotate_a(3))
        .opcode(0x27, Cpu::daa)
        .opcode(0x2F, Cpu::cpl)
        .opcode(0x37, Cpu::scf)
        .opcode(0x3F, Cpu::ccf)
        .nibble(0x1, Cpu::ld_reg16_imm16)
        .nibble(0x2, Cpu::ld_mem_at_reg16_a)
        .nibble(0x3, Cpu::inc_reg16)
        .nibble(0x9, Cpu::add_hl_reg16)
        .nibble(0xA, Cpu::ld_a_mem_at_reg16)
        .nibble(0xB, Cpu::dec_reg16)
        .r8_prime(0b100, Cpu::inc_reg8)
        .r8_prime(0b101, Cpu::dec_reg8)
        .r8_prime(0b110, Cpu::ld_reg8_imm8)
}

/// 01xx_xxxx: the register-to-register load matrix, with HALT in the slot
/// that would be `ld [hl], [hl]`.
fn block_1() -> OpcodeBlock {
    OpcodeBlock::new()
        .opcode(0x76, Cpu::halt)
        .r8_r8_prime(Cpu::ld_reg8_reg8)
}

/// 10xx_xxxx: 8-bit ALU on A, the operation in the r8 field and the
/// operand in r8'.
fn block_2() -> OpcodeBlock {
    OpcodeBlock::new()
        .r8(0b000, |cpu, bus, src| cpu.alu_a_reg8(bus, 0, src))
        .r8(0b001, |cpu, bus, src| cpu.alu_a_reg8(bus, 1, src))
        .r8(0b010, |cpu, bus, src| cpu.alu_a_reg8(bus, 2, src))
        .r8(0b011, |cpu, bus, src| cpu.alu_a_reg8(bus, 3, src))
        .r8(0b100, |cpu, bus, src| cpu.alu_a_reg8(bus, 4, src))
        .r8(0b101, |cpu, bus, src| cpu.alu_a_reg8(bus, 5, src))
        .r8(0b110, |cpu, bus, src| cpu.alu_a_reg8(bus, 6, src))
        .r8(0b111, |cpu, bus, src| cpu.alu_a_reg8(bus, 7, src))
}

/// 11xx_xxxx: immediate ALU, high-RAM and absolute loads, stack, jumps,
/// calls, returns, restarts and interrupt enable control.
///
/// D3, DB, DD, E3, E4, EB, EC, ED, F4, FC and FD have no handler.
fn block_3() -> OpcodeBlock {
    OpcodeBlock::new()
        .opcode(0xC6, |cpu, bus| cpu.alu_a_imm8(bus, 0))
        .opcode(0xCE, |cpu, bus| cpu.alu_a_imm8(bus, 1))
        .opcode(0xD6, |cpu, bus| cpu.alu_a_imm8(bus, 2))
        .opcode(0xDE, |cpu, bus| cpu.alu_a_imm8(bus, 3))
        .opcode(0xE6, |cpu, bus| cpu.alu_a_imm8(bus, 4))
        .opcode(0xEE, |cpu, bus| cpu.alu_a_imm8(bus, 5))
        .opcode(0xF6, |cpu, bus| cpu.alu_a_imm8(bus, 6))
        .opcode(0xFE, |cpu, bus| cpu.alu_a_imm8(bus, 7))
        .opcode(0xE0, Cpu::ldh_mem_at_imm8_a)
        .opcode(0xF0, Cpu::ldh_a_mem_at_imm8)
        .opcode(0xE2, Cpu::ldh_mem_at_c_a)
        .opcode(0xF2, Cpu::ldh_a_mem_at_c)
        .opcode(0xEA, Cpu::ld_mem_at_imm16_a)
        .opcode(0xFA, Cpu::ld_a_mem_at_imm16)
        .opcode(0xE8, Cpu::add_sp_imm8)
        .opcode(0xF8, Cpu::ld_hl_sp_imm8)
        .opcode(0xF9, Cpu::ld_sp_hl)
        .opcode(0xC3, Cpu::jp_imm16)
        .opcode(0xC2, |cpu, bus| cpu.jp_cond_imm16(bus, 0))
        .opcode(0xCA, |cpu, bus| cpu.jp_cond_imm16(bus, 1))
        .opcode(0xD2, |cpu, bus| cpu.jp_cond_imm16(bus, 2))
        .opcode(0xDA, |cpu, bus| cpu.jp_cond_imm16(bus, 3))
        .opcode(0xE9, Cpu::jp_hl)
        .opcode(0xCD, Cpu::call_imm16)
        .opcode(0xC4, |cpu, bus| cpu.call_cond_imm16(bus, 0))
        .opcode(0xCC, |cpu, bus| cpu.call_cond_imm16(bus, 1))
        .opcode(0xD4, |cpu, bus| cpu.call_cond_imm16(bus, 2))
        .opcode(0xDC, |cpu, bus| cpu.call_cond_imm16(bus, 3))
        .opcode(0xC9, Cpu::ret)
        .opcode(0xC0, |cpu, bus| cpu.ret_cond(bus, 0))
        .opcode(0xC8, |cpu, bus| cpu.ret_cond(bus, 1))
        .opcode(0xD0, |cpu, bus| cpu.ret_cond(bus, 2))
        .opcode(0xD8, |cpu, bus| cpu.ret_cond(bus, 3))
        .opcode(0xD9, Cpu::reti)
        .opcode(0xF3, Cpu::di)
        .opcode(0xFB, Cpu::ei)
        .nibble(0x1, Cpu::pop)
        .nibble(0x5, Cpu::push)
        .r8_prime(0b111, Cpu::rst)
}

/// CB 00oo_orrr: rotates and shifts, the operation in the r8 field.
fn cb_block_0() -> OpcodeBlock {
    OpcodeBlock::new()
        .r8(0b000, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 0, reg))
        .r8(0b001, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 1, reg))
        .r8(0b010, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 2, reg))
        .r8(0b011, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 3, reg))
        .r8(0b100, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 4, reg))
        .r8(0b101, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 5, reg))
        .r8(0b110, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 6, reg))
        .r8(0b111, |cpu, bus, reg| cpu.rotate_shift_reg8(bus, 7, reg))
}

/// CB 01bb_brrr: BIT b, r8.
fn cb_block_1() -> OpcodeBlock {
    OpcodeBlock::new().r8_r8_prime(Cpu::bit_reg8)
}

/// CB 10bb_brrr: RES b, r8.
fn cb_block_2() -> OpcodeBlock {
    OpcodeBlock::new().r8_r8_prime(Cpu::res_reg8)
}

/// CB 11bb_brrr: SET b, r8.
fn cb_block_3() -> OpcodeBlock {
    OpcodeBlock::new().r8_r8_prime(Cpu::set_reg8)
}
