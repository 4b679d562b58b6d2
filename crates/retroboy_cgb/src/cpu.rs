mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;

pub use bus::Bus;
pub use regs::*;

use crate::config::UnknownOpcodePolicy;

/// SM83 CPU core of the Game Boy Color.
///
/// Executes one whole instruction per [`Cpu::step`]. Every bus access made
/// through the CPU charges one M-cycle to the per-step counter; handlers only
/// add cycles themselves for internal delays that have no bus transaction.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Servicing interrupts is left to the
    /// interrupt controller; the CPU only tracks DI/EI/RETI.
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Like `halted`, cleared by [`Cpu::wake`].
    stopped: bool,
    /// EI takes effect after the instruction that follows it.
    ime_enable_pending: bool,
    /// M-cycles charged during the current step.
    cycles: u32,
    unknown_opcode: UnknownOpcodePolicy,
}

impl Cpu {
    /// M-cycles charged so far by the current (or last) step.
    #[inline]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Charge one bus cycle for an access made outside the CPU.
    #[inline]
    pub(crate) fn charge_cycle(&mut self) {
        self.cycles += 1;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave HALT or STOP. Called by whatever owns the wake-up source
    /// (interrupt controller, joypad).
    pub fn wake(&mut self) {
        if self.halted || self.stopped {
            log::debug!("CPU woken at PC=0x{:04X}", self.regs.pc);
        }
        self.halted = false;
        self.stopped = false;
    }

    pub fn set_unknown_opcode_policy(&mut self, policy: UnknownOpcodePolicy) {
        self.unknown_opcode = policy;
    }
}
