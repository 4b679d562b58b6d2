pub mod cgb;
pub mod config;
pub mod cpu;
pub mod error;
pub mod mmu;

pub use cgb::Cgb;
pub use config::{CgbConfig, UnknownOpcodePolicy};
pub use cpu::{Bus, Cpu, Flags, Reg16Mode, Registers};
pub use error::{CgbError, Result};
pub use mmu::{Mmu, Region, UnmappedAccesses, Window};
