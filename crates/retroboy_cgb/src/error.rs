use thiserror::Error;

pub type Result<T> = std::result::Result<T, CgbError>;

/// Conditions the core reports to its host.
///
/// Arithmetic never fails; only decoding, bank mapping and construction can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CgbError {
    /// No handler is registered for `opcode` in its block. `pc` is the
    /// address the opcode was fetched from.
    #[error("unknown opcode 0x{opcode:02X} at PC=0x{pc:04X} (CB-prefixed: {prefixed})")]
    UnknownOpcode { opcode: u8, pc: u16, prefixed: bool },

    #[error("ROM image of {size} bytes is outside the supported range ({min}..={max} bytes)")]
    RomSize { size: usize, min: usize, max: usize },

    #[error("no memory window starts at 0x{base:04X}")]
    UnknownWindow { base: u16 },

    #[error("bank {bank} does not fit the backing store of window 0x{base:04X}")]
    BankOutOfRange { base: u16, bank: usize },
}
