//! CPU configuration.

/// Cycles charged for an undefined opcode under [`IllegalOpcodePolicy::Nop`].
pub const ILLEGAL_NOP_CYCLES: u8 = 2;

/// What the engine does when it fetches an opcode with no table entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IllegalOpcodePolicy {
    /// Stop and return [`ExecutionError::IllegalOpcode`]. CPU state is untouched.
    ///
    /// [`ExecutionError::IllegalOpcode`]: crate::ExecutionError::IllegalOpcode
    #[default]
    Trap,
    /// Skip the byte as a 1-byte, [`ILLEGAL_NOP_CYCLES`]-cycle no-op.
    Nop,
}

/// CPU configuration. Fixed for the lifetime of a `CPU`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Defaults to [`IllegalOpcodePolicy::Trap`].
    pub illegal_opcode_policy: IllegalOpcodePolicy,
}

impl CpuConfig {
    pub fn with_illegal_opcode_policy(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_opcode_policy = policy;
        self
    }
}
