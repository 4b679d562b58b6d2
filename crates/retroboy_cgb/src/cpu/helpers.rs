use super::{Bus, Cpu, MEM_AT_HL_INDEX};

impl Cpu {
    /// One bus read cycle.
    #[inline]
    pub(super) fn read_cycle(&mut self, bus: &mut dyn Bus, addr: u16) -> u8 {
        self.cycles += 1;
        bus.read8(addr)
    }

    /// One bus write cycle.
    #[inline]
    pub(super) fn write_cycle(&mut self, bus: &mut dyn Bus, addr: u16, value: u8) {
        self.cycles += 1;
        bus.write8(addr, value);
    }

    /// One internal cycle without a bus transaction (ALU delay, SP adjust).
    #[inline]
    pub(super) fn idle_cycle(&mut self) {
        self.cycles += 1;
    }

    /// Read the byte at PC, then advance PC.
    #[inline]
    pub fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let pc = self.regs.pc;
        self.regs.pc = pc.wrapping_add(1);
        self.read_cycle(bus, pc)
    }

    /// Read a little-endian word at PC, then advance PC by two.
    #[inline]
    pub fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Indexed r8 read: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=[HL], 7=A.
    ///
    /// Index 6 is a bus read at HL and costs a cycle.
    #[inline]
    pub fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            MEM_AT_HL_INDEX => {
                let hl = self.regs.hl();
                self.read_cycle(bus, hl)
            }
            _ => self.regs.a,
        }
    }

    /// Indexed r8 write, same encoding as [`Cpu::read_reg8`].
    #[inline]
    pub fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            MEM_AT_HL_INDEX => {
                let hl = self.regs.hl();
                self.write_cycle(bus, hl, value);
            }
            _ => self.regs.a = value,
        }
    }

    /// Push high byte then low byte, decrementing SP before each write.
    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, lo);
    }

    /// Pop low byte then high byte, incrementing SP after each read.
    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.read_cycle(bus, self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.read_cycle(bus, self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }

    /// Condition codes NZ, Z, NC, C (2-bit `cc` field).
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.regs.zero,
            1 => self.regs.zero,
            2 => !self.regs.carry,
            _ => self.regs.carry,
        }
    }
}
