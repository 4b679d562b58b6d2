use crate::config::UnknownOpcodePolicy;

use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU with every register and flag cleared and PC at 0x0000.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            cycles: 0,
            unknown_opcode: UnknownOpcodePolicy::default(),
        }
    }

    /// Clear registers and control state. The unknown-opcode policy is kept.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_enable_pending = false;
        self.cycles = 0;
    }

    /// Load the register values the CGB boot ROM hands over to the cartridge
    /// at 0x0100 (Pan Docs, "Power Up Sequence", CGB in CGB mode).
    pub fn apply_cgb_boot_state(&mut self) {
        // A = 0x11; Z set, N/H/C clear.
        self.regs.set_af(0x1180);
        self.regs.b = 0x00;
        self.regs.c = 0x00;
        self.regs.d = 0xFF;
        self.regs.e = 0x56;
        self.regs.h = 0x00;
        self.regs.l = 0x0D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches the cartridge entry point.
        self.ime = false;
    }
}
