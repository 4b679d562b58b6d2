use crate::config::UnknownOpcodePolicy;
use crate::error::{CgbError, Result};

use super::decode::{CB_PREFIX, TABLES};
use super::{Bus, Cpu};

impl Cpu {
    /// Execute a single instruction and return the number of M-cycles taken.
    ///
    /// While halted or stopped this charges one idle cycle and executes
    /// nothing until [`Cpu::wake`] is called.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        self.step_dyn(bus)
    }

    fn step_dyn(&mut self, bus: &mut dyn Bus) -> Result<u32> {
        self.cycles = 0;

        if self.halted || self.stopped {
            self.idle_cycle();
            return Ok(self.cycles);
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        log::trace!("PC=0x{pc:04X} opcode=0x{opcode:02X}");

        // Latched before dispatch so that EI itself does not consume it.
        let enable_ime = self.ime_enable_pending;

        let (handler, opcode, prefixed) = if opcode == CB_PREFIX {
            let cb_opcode = self.fetch8(bus);
            (TABLES.cb_block(cb_opcode).resolve(cb_opcode), cb_opcode, true)
        } else {
            (TABLES.block(opcode).resolve(opcode), opcode, false)
        };

        match handler {
            Some(handler) => handler.invoke(self, bus),
            None => self.report_unknown_opcode(pc, opcode, prefixed)?,
        }

        if enable_ime && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }

        Ok(self.cycles)
    }

    fn report_unknown_opcode(&mut self, pc: u16, opcode: u8, prefixed: bool) -> Result<()> {
        let err = CgbError::UnknownOpcode {
            opcode,
            pc,
            prefixed,
        };
        match self.unknown_opcode {
            UnknownOpcodePolicy::Error => {
                log::error!("{err}");
                self.regs.pc = pc;
                Err(err)
            }
            UnknownOpcodePolicy::Ignore => {
                log::warn!("{err}; ignored");
                Ok(())
            }
        }
    }
}
