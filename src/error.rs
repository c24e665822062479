//! # Error Types
//!
//! Every failure the core can report is surfaced synchronously through one of
//! these enums. Nothing panics and nothing is swallowed: the caller of the
//! triggering operation always gets the error back.

use thiserror::Error;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An opcode with no entry in the instruction table was fetched while the
    /// CPU was configured with [`IllegalOpcodePolicy::Trap`].
    ///
    /// The CPU is left exactly as it was before the fetch: the program counter
    /// still points at the offending byte and no cycles were charged.
    ///
    /// [`IllegalOpcodePolicy::Trap`]: crate::IllegalOpcodePolicy::Trap
    #[error("illegal opcode 0x{opcode:02X} at 0x{address:04X}")]
    IllegalOpcode {
        /// The undefined opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}

/// Errors raised while building a memory bus, before any code runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A memory image did not cover the full 16-bit address space.
    #[error("memory image must be {expected} bytes, got {actual}")]
    InvalidMemorySize { expected: usize, actual: usize },

    /// A vector table did not hold exactly the NMI, RESET and IRQ/BRK words.
    #[error("vector table must hold {expected} entries, got {actual}")]
    InvalidVectorTable { expected: usize, actual: usize },
}
