use bitflags::bitflags;

/// 3-bit r8 operand encoding used throughout the opcode table.
pub const B_INDEX: u8 = 0;
pub const C_INDEX: u8 = 1;
pub const D_INDEX: u8 = 2;
pub const E_INDEX: u8 = 3;
pub const H_INDEX: u8 = 4;
pub const L_INDEX: u8 = 5;
/// Not a register: the byte on the bus at HL.
pub const MEM_AT_HL_INDEX: u8 = 6;
pub const A_INDEX: u8 = 7;

/// 2-bit r16 operand encoding. The meaning of index 2 and 3 depends on
/// [`Reg16Mode`].
pub const BC_INDEX: u8 = 0;
pub const DE_INDEX: u8 = 1;
pub const HL_HLI_INDEX: u8 = 2;
pub const SP_AF_HLD_INDEX: u8 = 3;

bitflags! {
    /// Packed form of the flags as they appear in the low byte of AF.
    ///
    /// Bits 3–0 do not exist on hardware and always read back as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        const ZERO = 0x80;
        const SUBTRACT = 0x40;
        const HALF_CARRY = 0x20;
        const CARRY = 0x10;
    }
}

/// How an r16 operand field is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reg16Mode {
    /// BC, DE, HL, SP.
    #[default]
    Normal,
    /// BC, DE, HL, AF (push/pop).
    Stack,
    /// BC, DE, HL then increment, HL then decrement (`[r16]` loads).
    Memory,
}

/// Register file of the SM83 core.
///
/// The four flags are stored as independent booleans; F only exists as the
/// packed low byte of [`Registers::af`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl Registers {
    #[inline]
    pub fn flags(&self) -> Flags {
        let mut flags = Flags::empty();
        flags.set(Flags::ZERO, self.zero);
        flags.set(Flags::SUBTRACT, self.subtract);
        flags.set(Flags::HALF_CARRY, self.half_carry);
        flags.set(Flags::CARRY, self.carry);
        flags
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.zero = flags.contains(Flags::ZERO);
        self.subtract = flags.contains(Flags::SUBTRACT);
        self.half_carry = flags.contains(Flags::HALF_CARRY);
        self.carry = flags.contains(Flags::CARRY);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.flags().bits()
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are ignored.
        self.set_flags(Flags::from_bits_truncate(f));
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Resolve an r16 field. In [`Reg16Mode::Memory`] the HL forms
    /// post-increment or post-decrement HL and return the old value.
    pub fn reg16(&mut self, index: u8, mode: Reg16Mode) -> u16 {
        match (index & 0x03, mode) {
            (BC_INDEX, _) => self.bc(),
            (DE_INDEX, _) => self.de(),
            (HL_HLI_INDEX, Reg16Mode::Memory) => {
                let hl = self.hl();
                self.set_hl(hl.wrapping_add(1));
                hl
            }
            (HL_HLI_INDEX, _) => self.hl(),
            (_, Reg16Mode::Normal) => self.sp,
            (_, Reg16Mode::Stack) => self.af(),
            (_, Reg16Mode::Memory) => {
                let hl = self.hl();
                self.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    /// Write an r16 field. Index 3 is SP in `Normal`, AF in `Stack` and HL
    /// in `Memory` mode.
    pub fn set_reg16(&mut self, index: u8, value: u16, mode: Reg16Mode) {
        match (index & 0x03, mode) {
            (BC_INDEX, _) => self.set_bc(value),
            (DE_INDEX, _) => self.set_de(value),
            (HL_HLI_INDEX, _) => self.set_hl(value),
            (_, Reg16Mode::Normal) => self.sp = value,
            (_, Reg16Mode::Stack) => self.set_af(value),
            (_, Reg16Mode::Memory) => self.set_hl(value),
        }
    }
}
