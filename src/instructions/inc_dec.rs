//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory (read-modify-write)
//! - INX, INY, DEX, DEY: Index registers
//!
//! All of them wrap modulo 256 and update only Z and N. The memory forms
//! never pay a page-crossing penalty: DEC abs,X is always 7 cycles.

use crate::addressing::Operand;
use crate::instructions::write_back;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = operand.value.wrapping_add(1);
    write_back(cpu, operand, result);
    cpu.regs.update_zero_and_negative(result);
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: &Operand) {
    let result = operand.value.wrapping_sub(1);
    write_back(cpu, operand, result);
    cpu.regs.update_zero_and_negative(result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.update_zero_and_negative(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.update_zero_and_negative(cpu.regs.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.update_zero_and_negative(cpu.regs.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.update_zero_and_negative(cpu.regs.y);
}
