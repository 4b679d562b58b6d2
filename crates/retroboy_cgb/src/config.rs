use typed_builder::TypedBuilder;

/// What `step` does when the decoder finds no handler for an opcode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum UnknownOpcodePolicy {
    /// Report `CgbError::UnknownOpcode` and leave PC on the offending byte.
    #[default]
    Error,
    /// Log a warning and treat the opcode as a one-cycle no-op.
    Ignore,
}

/// Construction-time settings for a [`Cgb`](crate::Cgb).
#[derive(Clone, Debug, TypedBuilder)]
pub struct CgbConfig {
    #[builder(default)]
    pub unknown_opcode: UnknownOpcodePolicy,
    /// Start from the register values the CGB boot ROM leaves behind at
    /// 0x0100 instead of all-zero registers.
    #[builder(default = false)]
    pub post_boot_state: bool,
    /// Emit a `warn!` for every access to an unmapped address.
    #[builder(default = true)]
    pub warn_on_unmapped: bool,
}

impl Default for CgbConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
