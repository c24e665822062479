//! # Load and Store Instructions
//!
//! This module implements register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory (updates Z and N)
//! - STA, STX, STY: Store a register to memory (no flags affected)
//!
//! Loads are read-class and take an extra cycle when indexing crosses a page;
//! stores never do. The engine applies that penalty from the opcode table.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    cpu.regs.a = operand.value;
    cpu.regs.update_zero_and_negative(operand.value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    cpu.regs.x = operand.value;
    cpu.regs.update_zero_and_negative(operand.value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    cpu.regs.y = operand.value;
    cpu.regs.update_zero_and_negative(operand.value);
}

/// Executes STA, STX or STY: writes `value` to the effective address.
pub(crate) fn execute_store<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand, value: u8) {
    if let Some(addr) = operand.address {
        cpu.memory.write(addr, value);
    }
}
